//! Init command implementation
//!
//! Scaffolds `kairos.toml`, `.env.example` and a `.gitignore` for a new
//! deployment.

use super::output::Output;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    Success,
    /// kairos.toml exists and `--force` was not given
    AlreadyExists,
    Error(String),
}

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    pub host: String,
    pub port: u16,
    /// Gemini model to call
    pub model: String,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing Kairos");

    let base_path = &config.path;

    let config_path = base_path.join("kairos.toml");
    if config_path.exists() && !config.force {
        output.warning("kairos.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    output.subheader("Creating configuration files");

    if let Err(e) = write_file(&config_path, &generate_kairos_toml(&config), config.force) {
        output.error(&format!("Failed to create kairos.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "kairos.toml");

    let env_example_path = base_path.join(".env.example");
    if let Err(e) = write_file(&env_example_path, &generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("env", ".env.example");

    // .gitignore is never overwritten, even with --force
    let gitignore_path = base_path.join(".gitignore");
    if gitignore_path.exists() {
        output.skipped(".gitignore", "already exists");
    } else if let Err(e) = write_file(&gitignore_path, &generate_gitignore(), false) {
        output.warning(&format!("Failed to create .gitignore: {}", e));
    } else {
        output.created("file", ".gitignore");
    }

    output.complete("Kairos project initialized successfully!");

    output.header("Next Steps");
    output.newline();
    output.info("1. Set the Gemini API key:");
    output.command("cp .env.example .env");
    output.command("# Edit .env and set GEMINI_API_KEY");
    output.newline();
    output.info("2. Build the UI bundle:");
    output.command("cd ui && trunk build --release");
    output.newline();
    output.info("3. Start the server:");
    output.command("kairos-server");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, content)
}

fn generate_kairos_toml(config: &InitConfig) -> String {
    format!(
        r#"# Kairos server configuration
# Secrets never go here: the upstream key is read from the
# environment variable named by upstream.api_key_env.

[server]
host = "{host}"
port = {port}
log_level = "info"
# "pretty" or "json"
log_format = "pretty"
body_limit_bytes = 1048576
# Empty list allows any origin
cors_origins = []

[upstream]
base_url = "https://generativelanguage.googleapis.com"
model = "{model}"
api_key_env = "GEMINI_API_KEY"
# timeout_secs = 60

[ui]
static_dir = "ui/dist"
"#,
        host = config.host,
        port = config.port,
        model = config.model,
    )
}

fn generate_env_example() -> String {
    r#"# Kairos environment variables
# Copy this file to .env and fill in the values.

# Gemini API key used by /api/call-gemini (required for chat requests)
GEMINI_API_KEY=

# Optional overrides for [server] host/port
# KAIROS_HOST=127.0.0.1
# KAIROS_PORT=8888

# Log filter, takes precedence over server.log_level
# RUST_LOG=kairos=debug,tower_http=info
"#
    .to_string()
}

fn generate_gitignore() -> String {
    r#"/target
/ui/dist
.env
"#
    .to_string()
}
