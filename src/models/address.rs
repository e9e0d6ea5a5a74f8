//! Address value type resolved from a CEP.

use serde::{Deserialize, Serialize};

/// A postal address as returned by the ViaCEP lookup service.
///
/// Field names follow the domain; the serialized keys match the provider
/// payload, which is also the snapshot format. An `Address` is only ever
/// produced by a successful resolution and is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    /// CEP as formatted by the provider (e.g. "01001-000")
    #[serde(rename = "cep")]
    pub postal_code: String,

    /// Street name
    #[serde(rename = "logradouro")]
    pub street: String,

    /// Neighborhood
    #[serde(rename = "bairro")]
    pub neighborhood: String,

    /// City
    #[serde(rename = "localidade")]
    pub city: String,

    /// Federative unit (state abbreviation)
    #[serde(rename = "uf")]
    pub region: String,
}
