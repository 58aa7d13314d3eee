//! Application configuration loaded from environment variables and CLI flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags take priority over environment variables, which
//! take priority over the defaults.
//!
//! ## Variables
//!
//! - `REDIR_FILE` / `--redir-file` - Redirect storage file (default: `redirs.json`)
//! - `PORT` / `--port` - HTTP port (default: `8080`)
//! - `HOST` / `--host` - Bind address (default: `0.0.0.0`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

const DEFAULT_REDIR_FILE: &str = "redirs.json";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Command-line flags of the server binary.
#[derive(Debug, Default, Parser)]
#[command(name = "shorty")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// The path to the file to use as persistent storage
    #[arg(long = "redir-file", value_name = "PATH")]
    pub redir_file: Option<PathBuf>,

    /// Which port to start the HTTP server on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Which address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<String>,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub redir_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let redir_file = env::var("REDIR_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REDIR_FILE));
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redir_file,
            host,
            port,
            log_level,
            log_format,
        })
    }

    /// Applies command-line flags on top of the loaded configuration.
    pub fn with_args(mut self, args: CliArgs) -> Self {
        if let Some(redir_file) = args.redir_file {
            self.redir_file = redir_file;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(host) = args.host {
            self.host = host;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `redir_file` is empty
    /// - `port` is 0
    /// - `host` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.redir_file.as_os_str().is_empty() {
            anyhow::bail!("REDIR_FILE must not be empty");
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.host.is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Address the HTTP server binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());

        match std::path::absolute(&self.redir_file) {
            Ok(path) => tracing::info!("  Redirect file: {}", path.display()),
            Err(e) => tracing::warn!(
                "  Redirect file: {} (could not resolve absolute path: {})",
                self.redir_file.display(),
                e
            ),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from the environment, applies `args` and validates
/// the result.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(args: CliArgs) -> Result<Config> {
    let config = Config::from_env()?.with_args(args);
    config.validate()?;
    Ok(config)
}
