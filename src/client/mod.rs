//! HTTP client for the ViaCEP lookup service.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles error
//! mapping and strips the provider's error flag from successful payloads.

mod async_wrapper;
pub use async_wrapper::{AsyncCepClient, AsyncCepClientImpl};

use crate::config::Config;
use crate::error::{CepApiError, CepApiResult};
use crate::models::Address;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use std::time::Duration;

/// Raw ViaCEP response payload.
///
/// On success the body carries the address fields; for an unknown code the
/// provider returns `{"erro": true}` (older deployments send the string
/// `"true"`) with status 200.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default, deserialize_with = "deserialize_erro")]
    erro: bool,

    #[serde(flatten)]
    address: Address,
}

/// Accepts the provider's error flag as either a bool or a string.
fn deserialize_erro<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

/// HTTP client for the ViaCEP service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ViaCepClient {
    /// Base URL for the lookup service
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl ViaCepClient {
    /// Create a new ViaCepClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.viacep_base_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a ViaCepClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build the lookup URL for a normalized code.
    fn build_url(&self, cep: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}/json/", base, cep)
    }

    /// Map a ureq error to a CepApiError.
    fn map_error(&self, error: ureq::Error) -> CepApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                CepApiError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    CepApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    CepApiError::Timeout
                } else {
                    CepApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch the address for a normalized, digits-only CEP.
    ///
    /// Expects `cep` to already be 8 digits; shape validation belongs to the
    /// resolver. A provider-reported unknown code maps to
    /// `CepApiError::CepNotFound`.
    pub fn fetch_address(&self, cep: &str) -> CepApiResult<Address> {
        let url = self.build_url(cep);
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| self.map_error(e))?;

        let body = response
            .into_string()
            .map_err(|e| CepApiError::HttpError(e.to_string()))?;

        let payload: ViaCepPayload =
            serde_json::from_str(&body).map_err(CepApiError::JsonError)?;

        if payload.erro {
            return Err(CepApiError::CepNotFound(cep.to_string()));
        }

        Ok(payload.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = ViaCepClient::with_base_url("https://viacep.com.br/ws".to_string());
        assert_eq!(
            client.build_url("01001000"),
            "https://viacep.com.br/ws/01001000/json/"
        );

        let client_with_slash = ViaCepClient::with_base_url("https://viacep.com.br/ws/".to_string());
        assert_eq!(
            client_with_slash.build_url("01001000"),
            "https://viacep.com.br/ws/01001000/json/"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config::default();
        let client = ViaCepClient::new(&config);
        assert_eq!(client.base_url, "https://viacep.com.br/ws");
    }

    #[test]
    fn test_payload_erro_as_bool() {
        let payload: ViaCepPayload = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(payload.erro);
    }

    #[test]
    fn test_payload_erro_as_string() {
        let payload: ViaCepPayload = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(payload.erro);
    }

    #[test]
    fn test_payload_without_erro_flag() {
        let payload: ViaCepPayload = serde_json::from_str(
            r#"{"cep": "01001-000", "logradouro": "Praça da Sé", "bairro": "Sé", "localidade": "São Paulo", "uf": "SP"}"#,
        )
        .unwrap();
        assert!(!payload.erro);
        assert_eq!(payload.address.city, "São Paulo");
    }
}
