//! TOML-based configuration for Kairos
//!
//! Server, upstream and UI settings are read from `kairos.toml`. Every field
//! has a default, so a missing file yields a usable configuration. Secrets are
//! never stored in the file: the config only names the environment variable
//! holding the upstream credential, and that variable is read per request.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Root configuration structure loaded from kairos.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KairosConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Largest request body accepted by the API routes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_body_limit() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            body_limit_bytes: default_body_limit(),
            cors_origins: Vec::new(),
        }
    }
}

// ============= Upstream Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable name containing the upstream API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-call timeout; unset waits for the upstream indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// ============= UI Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Directory holding the compiled Leptos bundle (trunk output)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("ui/dist")
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for environment variable '{0}': {1}")]
    InvalidEnvVar(String, String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl KairosConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let config = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            info!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        let config = config.with_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text without touching the environment
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `KAIROS_HOST` / `KAIROS_PORT` on top of file values
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = std::env::var("KAIROS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("KAIROS_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidEnvVar("KAIROS_PORT".to_string(), e.to_string())
                })?;
        }
        Ok(self)
    }

    /// Validate the configuration for internal consistency
    ///
    /// The credential variable is deliberately not checked here: a missing key
    /// fails individual proxy requests, not server startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.body_limit_bytes must be non-zero".to_string(),
            ));
        }

        let base_url = &self.upstream.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "upstream.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if self.upstream.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "upstream.model must not be empty".to_string(),
            ));
        }
        if self.upstream.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "upstream.api_key_env must not be empty".to_string(),
            ));
        }
        if self.upstream.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "upstream.timeout_secs must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether the credential variable is currently present in the environment
    pub fn credential_present(&self) -> bool {
        std::env::var(&self.upstream.api_key_env).is_ok_and(|v| !v.is_empty())
    }
}
