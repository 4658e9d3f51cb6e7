/// TOML configuration (`kairos.toml`) loading and validation.
pub mod toml_config;
