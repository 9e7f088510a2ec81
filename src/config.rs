//! Application configuration loaded from environment variables.
//!
//! Every setting has a development default matching the XAMPP-style local
//! MySQL setup, so the server and diagnostics run without a .env file.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host. IP rather than `localhost` so the port is respected
    /// on hosts that map `localhost` to a socket.
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// Database user
    pub db_user: String,
    /// Database password
    pub db_pass: String,
    /// Server port
    pub port: u16,
    /// State directory for the streak tracker's durable store
    pub state_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            db_host: "127.0.0.1".to_string(),
            db_port: 3307,
            db_name: "fitzone_database".to_string(),
            db_user: "root".to_string(),
            db_pass: String::new(),
            port: 8080,
            state_dir: PathBuf::from(".fitzone"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "3307".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_PORT"))?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "fitzone_database".to_string()),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
            db_pass: env::var("DB_PASS").unwrap_or_default(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            state_dir: env::var("STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".fitzone")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
