//! Error types for the CEP agenda.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when calling the ViaCEP API.
#[derive(Error, Debug)]
pub enum CepApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Provider flagged the CEP as unknown (`erro` field in the payload)
    #[error("CEP not recognized by provider: {0}")]
    CepNotFound(String),
}

/// Errors that can occur while resolving a raw CEP string to an address.
///
/// `AddressResolver::resolve_opt` collapses all of these to a single absent
/// result for callers that only distinguish resolved from not resolved;
/// `resolve` exposes the cause.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Input did not normalize to exactly 8 digits; no lookup was attempted
    #[error("invalid CEP format: {0:?}")]
    InvalidFormat(String),

    /// Provider does not know the code
    #[error("CEP not found: {0}")]
    NotFound(String),

    /// Transport, status, or parse failure during the lookup
    #[error("lookup failed: {0}")]
    Transport(#[from] CepApiError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur in the persistence substrate.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failed
    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CepApiError
pub type CepApiResult<T> = Result<T, CepApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
