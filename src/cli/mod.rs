//! CLI module for Kairos
//!
//! Argument parsing uses clap; terminal output goes through [`output::Output`]
//! (owo-colors).

pub mod config;
pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kairos - coaching site server and Gemini chat proxy
#[derive(Parser, Debug)]
#[command(
    name = "kairos-server",
    version,
    about = "Kairos - coaching site server and Gemini chat proxy",
    long_about = "Serves the Kairos AI Coaching site and forwards chat prompts to the\n\
                  Gemini generateContent API with a server-held key.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a config.",
    after_help = "EXAMPLES:\n    \
                  kairos-server init              # Scaffold kairos.toml and .env.example\n    \
                  kairos-server config --validate # Check the configuration\n    \
                  kairos-server                   # Start the server\n    \
                  kairos-server --config my.toml  # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "kairos.toml", global = true)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create kairos.toml, .env.example and .gitignore
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "8888")]
        port: u16,

        /// Gemini model to forward prompts to
        #[arg(long, default_value = "gemini-2.0-flash")]
        model: String,
    },

    /// Show the effective configuration
    Config {
        /// Exit with an error if the configuration is invalid
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
