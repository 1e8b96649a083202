//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Netdata agent connection configuration.
    pub netdata: NetdataConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection configuration for the Netdata agent.
///
/// Immutable after client construction; every outgoing request is built
/// from it.
#[derive(Clone, Serialize, Deserialize)]
pub struct NetdataConfig {
    /// Base URL of the Netdata agent.
    pub base_url: String,

    /// Optional API key, forwarded as a bearer token.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for NetdataConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetdataConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for NetdataConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:19999".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "netdata-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            netdata: NetdataConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
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
    /// Agent connection settings use the `NETDATA_` prefix; server settings
    /// use `MCP_`. For example: `NETDATA_URL`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("NETDATA_URL") {
            config.netdata.base_url = url;
        }

        if let Ok(api_key) = std::env::var("NETDATA_API_KEY") {
            config.netdata.api_key = Some(api_key);
            info!("Netdata API key loaded from environment");
        }

        if let Ok(timeout) = std::env::var("NETDATA_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.netdata.timeout_secs = secs;
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

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
    fn test_netdata_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("NETDATA_URL", "http://agent:19999");
            std::env::set_var("NETDATA_API_KEY", "test_key_12345");
            std::env::set_var("NETDATA_TIMEOUT_SECS", "7");
        }
        let config = Config::from_env();
        assert_eq!(config.netdata.base_url, "http://agent:19999");
        assert_eq!(config.netdata.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(config.netdata.timeout_secs, 7);
        unsafe {
            std::env::remove_var("NETDATA_URL");
            std::env::remove_var("NETDATA_API_KEY");
            std::env::remove_var("NETDATA_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_netdata_config_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("NETDATA_URL");
            std::env::remove_var("NETDATA_API_KEY");
            std::env::remove_var("NETDATA_TIMEOUT_SECS");
        }
        let config = Config::from_env();
        assert_eq!(config.netdata.base_url, "http://localhost:19999");
        assert!(config.netdata.api_key.is_none());
        assert_eq!(config.netdata.timeout_secs, 30);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let netdata = NetdataConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", netdata);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("NETDATA_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.netdata.timeout_secs, 30);
        unsafe {
            std::env::remove_var("NETDATA_TIMEOUT_SECS");
        }
    }
}
