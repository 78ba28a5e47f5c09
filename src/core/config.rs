//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default base URL for TheAudioDB API.
pub const DEFAULT_AUDIODB_BASE_URL: &str = "https://www.theaudiodb.com/api/v1/json";

/// TheAudioDB's public test key. Not a secret, but custom keys are.
pub const PUBLIC_TEST_KEY: &str = "2";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream TheAudioDB API configuration.
    pub audiodb: AudioDbConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the upstream TheAudioDB API.
#[derive(Clone, Serialize, Deserialize)]
pub struct AudioDbConfig {
    /// Base URL of the API.
    pub base_url: String,

    /// API key. `"2"` is the public test key; anything else is a paid
    /// key and must not appear in logs.
    pub api_key: String,
}

impl AudioDbConfig {
    /// Whether the configured key is the public test key.
    pub fn is_test_key(&self) -> bool {
        self.api_key == PUBLIC_TEST_KEY
    }

    /// Key classification safe to log.
    pub fn key_kind(&self) -> &'static str {
        if self.is_test_key() { "test key" } else { "custom key" }
    }
}

/// Custom Debug implementation to keep custom API keys out of logs.
impl std::fmt::Debug for AudioDbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioDbConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.key_kind())
            .finish()
    }
}

impl Default for AudioDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUDIODB_BASE_URL.to_string(),
            api_key: PUBLIC_TEST_KEY.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "audiodb-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            audiodb: AudioDbConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); the upstream API uses `AUDIODB_BASE_URL` and
    /// `AUDIODB_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("AUDIODB_BASE_URL") {
            config.audiodb.base_url = base_url;
        }

        if let Ok(api_key) = std::env::var("AUDIODB_API_KEY") {
            config.audiodb.api_key = api_key;
        }

        info!(
            "TheAudioDB client configured with base URL: {} and API key: {}",
            config.audiodb.base_url,
            config.audiodb.key_kind()
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_audiodb_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("AUDIODB_BASE_URL", "http://localhost:9999/api");
            std::env::set_var("AUDIODB_API_KEY", "custom_key_123");
        }
        let config = Config::from_env();
        assert_eq!(config.audiodb.base_url, "http://localhost:9999/api");
        assert_eq!(config.audiodb.api_key, "custom_key_123");
        unsafe {
            std::env::remove_var("AUDIODB_BASE_URL");
            std::env::remove_var("AUDIODB_API_KEY");
        }
    }

    #[test]
    fn test_audiodb_default_is_public_test_key() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("AUDIODB_BASE_URL");
            std::env::remove_var("AUDIODB_API_KEY");
        }
        let config = Config::from_env();
        assert_eq!(config.audiodb.api_key, PUBLIC_TEST_KEY);
        assert!(config.audiodb.is_test_key());
        assert_eq!(config.audiodb.base_url, DEFAULT_AUDIODB_BASE_URL);
    }

    #[test]
    fn test_log_timestamps_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env();
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
        let config = Config::from_env();
        assert!(config.logging.with_timestamps);
    }

    #[test]
    fn test_custom_key_redacted_in_debug() {
        let audiodb = AudioDbConfig {
            base_url: DEFAULT_AUDIODB_BASE_URL.to_string(),
            api_key: "super_secret_key".to_string(),
        };
        let debug_str = format!("{:?}", audiodb);
        assert!(debug_str.contains("custom key"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_test_key_classification() {
        let audiodb = AudioDbConfig::default();
        assert_eq!(audiodb.key_kind(), "test key");
    }
}
