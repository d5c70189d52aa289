use crate::constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, LOGIN_PATH};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the admin REST API
pub struct RestApiConfig {
    /// Origin of the backend, e.g. `https://localhost:7270`
    pub base_url: String,
    /// Optional per-request timeout in seconds. `None` lets a hung call wait forever
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Where the credential pair is persisted
pub struct StorageConfig {
    /// JSON file backing the session store. `None` keeps credentials in memory only
    pub path: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the admin API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session store configuration
    pub storage: StorageConfig,
    /// Version segment used when building endpoints
    pub api_version: String,
    /// Location the navigator is sent to when credentials are cleared
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present. The backend origin is the compile-time
    /// [`DEFAULT_BASE_URL`]; the remaining settings come from
    /// `MARKETDATA_REST_TIMEOUT`, `MARKETDATA_SESSION_FILE` and
    /// `MARKETDATA_API_VERSION`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: get_env_or_none("MARKETDATA_REST_TIMEOUT"),
            },
            storage: StorageConfig {
                path: get_env_or_none::<String>("MARKETDATA_SESSION_FILE").map(PathBuf::from),
            },
            api_version: get_env_or_default(
                "MARKETDATA_API_VERSION",
                DEFAULT_API_VERSION.to_string(),
            ),
            login_path: LOGIN_PATH.to_string(),
        }
    }

    /// Creates a configuration pointing at an explicit origin, with in-memory storage
    ///
    /// Mostly useful for tests and tools that talk to a non-default backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: None,
            },
            storage: StorageConfig::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            login_path: LOGIN_PATH.to_string(),
        }
    }

    /// Joins an endpoint path onto the configured origin
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
