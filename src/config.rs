use std::env;
use std::path::PathBuf;

use crate::modules::portfolio::adapter::outgoing::FileKeyValueStore;
use crate::modules::portfolio::application::ports::outgoing::DEFAULT_STORAGE_KEY;
use crate::modules::wizard::application::registry::DEFAULT_IDLE_MINUTES;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error(
        "PORTFOLIO_STORAGE_KEY may only use letters, digits, '.', '-' and '_' and must not start with '.', got {0:?}"
    )]
    InvalidStorageKey(String),

    #[error("{name} must be a positive number of minutes, got {value:?}")]
    InvalidMinutes { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding one `<key>.json` file per stored key.
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// Wizard sessions idle for longer than this are discarded.
    pub wizard_idle_minutes: i64,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value,
            })?,
            None => 8080,
        };

        let data_dir = lookup("PORTFOLIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let storage_key =
            lookup("PORTFOLIO_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            return Err(ConfigError::Empty("PORTFOLIO_STORAGE_KEY"));
        }
        if !FileKeyValueStore::is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidStorageKey(storage_key));
        }

        let wizard_idle_minutes = match lookup("WIZARD_IDLE_MINUTES") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    return Err(ConfigError::InvalidMinutes {
                        name: "WIZARD_IDLE_MINUTES",
                        value,
                    })
                }
            },
            None => DEFAULT_IDLE_MINUTES,
        };

        Ok(Self {
            host,
            port,
            data_dir,
            storage_key,
            wizard_idle_minutes,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
