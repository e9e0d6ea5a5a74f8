//! Turns raw postal-code input into a validated address.
//!
//! The resolver normalizes the input, gates on the 8-digit shape before any
//! network traffic, and performs a single lookup. `resolve` reports the
//! failure cause; `resolve_opt` collapses every failure to an absent result
//! for callers that only distinguish resolved from not resolved.

use crate::client::AsyncCepClient;
use crate::error::{CepApiError, ResolveError};
use crate::models::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid regex"));

/// Number of digits in a well-formed CEP.
pub const CEP_LEN: usize = 8;

/// Strip all non-digit characters from a raw CEP string.
pub fn normalize_cep(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Resolves raw CEP strings into addresses via the lookup client.
pub struct AddressResolver {
    client: Arc<dyn AsyncCepClient>,
}

impl AddressResolver {
    pub fn new(client: Arc<dyn AsyncCepClient>) -> Self {
        Self { client }
    }

    /// Resolve a raw CEP string to an address, reporting the failure cause.
    ///
    /// Inputs that do not normalize to exactly 8 digits fail with
    /// `ResolveError::InvalidFormat` without touching the network. No retry,
    /// no caching: every call is a fresh round trip.
    pub async fn resolve(&self, raw: &str) -> Result<Address, ResolveError> {
        let cep = normalize_cep(raw);
        if cep.len() != CEP_LEN {
            return Err(ResolveError::InvalidFormat(raw.to_string()));
        }

        match self.client.fetch_address(&cep).await {
            Ok(address) => Ok(address),
            Err(CepApiError::CepNotFound(code)) => Err(ResolveError::NotFound(code)),
            Err(e) => Err(ResolveError::Transport(e)),
        }
    }

    /// Collapsing form of `resolve`: any failure becomes `None`.
    ///
    /// For callers that only distinguish "resolved" from "not resolved" and
    /// do not care about the cause.
    pub async fn resolve_opt(&self, raw: &str) -> Option<Address> {
        match self.resolve(raw).await {
            Ok(address) => Some(address),
            Err(e) => {
                tracing::debug!("CEP resolution failed: {}", e);
                None
            }
        }
    }
}
