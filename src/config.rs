//! Configuration management for the CEP agenda.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default base URL of the ViaCEP lookup service.
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// Configuration for the CEP agenda.
#[derive(Debug, Clone)]
pub struct Config {
    /// ViaCEP base URL
    pub viacep_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Directory backing the file key-value store (default: ".agenda")
    pub data_dir: PathBuf,

    /// Seconds a toast stays visible before expiring (default: 3)
    pub toast_ttl_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `VIACEP_BASE_URL`: Base URL for the lookup service (default: the public ViaCEP host)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `AGENDA_DATA_DIR`: Snapshot directory (default: ".agenda")
    /// - `TOAST_TTL_SECS`: Toast lifetime in seconds (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let viacep_base_url =
            env::var("VIACEP_BASE_URL").unwrap_or_else(|_| DEFAULT_VIACEP_BASE_URL.to_string());

        if !viacep_base_url.starts_with("http://") && !viacep_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "VIACEP_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let toast_ttl_secs = Self::parse_env_u64("TOAST_TTL_SECS", 3)?;

        let data_dir = env::var("AGENDA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".agenda"));

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            viacep_base_url,
            request_timeout,
            data_dir,
            toast_ttl_secs,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            viacep_base_url: DEFAULT_VIACEP_BASE_URL.to_string(),
            request_timeout: 10,
            data_dir: PathBuf::from(".agenda"),
            toast_ttl_secs: 3,
            log_level: "error".to_string(),
        }
    }
}
