//! # Kairos - coaching site server and Gemini chat proxy
//!
//! Serves the Kairos AI Coaching single-page site (built from the `ui/`
//! Leptos crate) and exposes one thin endpoint that forwards chat prompts to
//! the Gemini `generateContent` API with a server-held key.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use kairos::{AppState, api::routes::create_app, utils::toml_config::KairosConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = KairosConfig::load("kairos.toml")?;
//!     let state = AppState::from_config(config)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8888").await?;
//!     axum::serve(listener, create_app(state)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST handlers and routes
//! - [`llm`] - Upstream Gemini client and credential lookup
//! - [`cli`] - Command-line interface
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration

/// HTTP API handlers and routes.
pub mod api;
/// Command-line parsing, project scaffolding and terminal output.
pub mod cli;
/// Gemini client and API key sources.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities (TOML).
pub mod utils;

pub use llm::{CredentialSource, EnvCredential, GeminiClient, StaticCredential};
pub use types::{AppError, Result};
pub use utils::toml_config::KairosConfig;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<KairosConfig>,
    /// Upstream Gemini client
    pub gemini: Arc<GeminiClient>,
    /// Source of the upstream API key, consulted per request
    pub credentials: Arc<dyn CredentialSource>,
}

impl AppState {
    pub fn new(
        config: KairosConfig,
        gemini: GeminiClient,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            gemini: Arc::new(gemini),
            credentials,
        }
    }

    /// Build state from configuration, reading the key from the configured
    /// environment variable
    pub fn from_config(config: KairosConfig) -> Result<Self> {
        let gemini = GeminiClient::from_config(&config.upstream)?;
        let credentials = Arc::new(EnvCredential::new(config.upstream.api_key_env.clone()));
        Ok(Self::new(config, gemini, credentials))
    }
}
