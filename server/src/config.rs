//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TABLE: &str = "facts";
pub const DEFAULT_KEY_ENV: &str = "FACTS_BACKEND_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the hosted fact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub timeouts: BackendTimeouts,
}

/// Where fact rows live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// The hosted PostgREST backend.
    Backend(BackendConfig),
    /// Seeded in-process store for local development.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub store: StoreConfig,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Required unless `FACTS_MEMORY_STORE=1`:
    /// - `FACTS_BACKEND_URL`: base URL of the hosted backend
    /// - the key variable named by `FACTS_BACKEND_KEY_ENV` (default `FACTS_BACKEND_KEY`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FACTS_TABLE`: default `facts`
    /// - `FACTS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `FACTS_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        if env_flag("FACTS_MEMORY_STORE") {
            return Ok(Self { port, store: StoreConfig::Memory });
        }

        let base_url = std::env::var("FACTS_BACKEND_URL")
            .map_err(|_| ConfigError::Missing { var: "FACTS_BACKEND_URL".into() })?
            .trim_end_matches('/')
            .to_string();
        if !facts::is_valid_http_url(&base_url) {
            return Err(ConfigError::Parse(format!("FACTS_BACKEND_URL is not an http(s) URL: {base_url}")));
        }

        let key_var = std::env::var("FACTS_BACKEND_KEY_ENV").unwrap_or_else(|_| DEFAULT_KEY_ENV.to_string());
        let api_key = std::env::var(&key_var).map_err(|_| ConfigError::Missing { var: key_var.clone() })?;

        let table = std::env::var("FACTS_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("FACTS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("FACTS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, store: StoreConfig::Backend(BackendConfig { base_url, api_key, table, timeouts }) })
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| matches!(v.as_str(), "1" | "true" | "yes"))
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
