//! Async wrapper around the synchronous ViaCepClient.
//!
//! Uses `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime.

use crate::client::ViaCepClient;
use crate::error::{CepApiError, CepApiResult};
use crate::models::Address;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface for CEP lookups.
///
/// The trait is the seam mocked in tests; the production implementation
/// delegates to the synchronous `ViaCepClient`.
#[async_trait]
pub trait AsyncCepClient: Send + Sync {
    async fn fetch_address(&self, cep: &str) -> CepApiResult<Address>;
}

/// Async wrapper around the synchronous ViaCepClient.
#[derive(Clone)]
pub struct AsyncCepClientImpl {
    client: Arc<ViaCepClient>,
}

impl AsyncCepClientImpl {
    pub fn new(client: ViaCepClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncCepClient for AsyncCepClientImpl {
    async fn fetch_address(&self, cep: &str) -> CepApiResult<Address> {
        let client = self.client.clone();
        let cep = cep.to_string();

        tokio::task::spawn_blocking(move || client.fetch_address(&cep))
            .await
            .map_err(|e| CepApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
