//! Config command implementation

use super::output::Output;
use crate::utils::toml_config::{KairosConfig, LogFormat};
use std::path::Path;

/// Print the effective configuration. Returns `false` when it failed to load
/// or validate.
///
/// The credential value is never printed, only whether its variable is set.
pub fn run(path: &Path, validate: bool, output: &Output) -> bool {
    output.header("Kairos Configuration");

    let config = match KairosConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{}: {}", path.display(), e));
            return false;
        }
    };

    if path.exists() {
        output.kv("file", &path.display().to_string());
    } else {
        output.kv("file", &format!("{} (not found, using defaults)", path.display()));
    }

    output.subheader("Server");
    output.kv("address", &config.bind_address());
    output.kv("log_level", &config.server.log_level);
    output.kv(
        "log_format",
        match config.server.log_format {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        },
    );
    output.kv("body_limit_bytes", &config.server.body_limit_bytes.to_string());
    let origins = if config.server.cors_origins.is_empty() {
        "any".to_string()
    } else {
        config.server.cors_origins.join(", ")
    };
    output.kv("cors_origins", &origins);

    output.subheader("Upstream");
    output.kv("base_url", &config.upstream.base_url);
    output.kv("model", &config.upstream.model);
    output.kv("api_key_env", &config.upstream.api_key_env);
    output.kv(
        "timeout",
        &config
            .upstream
            .timeout_secs
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string()),
    );

    output.subheader("UI");
    output.kv("static_dir", &config.ui.static_dir.display().to_string());

    output.newline();
    if config.credential_present() {
        output.success(&format!("{} is set", config.upstream.api_key_env));
    } else {
        output.warning(&format!(
            "{} is not set; chat requests will fail until it is",
            config.upstream.api_key_env
        ));
    }

    if !config.ui.static_dir.join("index.html").exists() {
        output.warning("UI bundle not built; only API routes will be served");
        output.command("cd ui && trunk build --release");
    }

    if validate {
        output.success("Configuration is valid");
    }

    true
}
