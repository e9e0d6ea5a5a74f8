//! Contact entity stored by the agenda.

use crate::models::Address;
use serde::{Deserialize, Serialize};

/// A stored contact pairing user-facing names with a resolved address.
///
/// Serialized keys use the camelCase snapshot format (`userName`,
/// `displayName`, `cep`). The `address` is always the result of a
/// successful CEP resolution; a contact never carries a partial address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier, caller-generated. Uniqueness is expected but not
    /// enforced by the store.
    pub id: String,

    /// Name of the person the address belongs to
    #[serde(rename = "userName")]
    pub user_name: String,

    /// User-facing label for the address entry
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Digits-only CEP, length 8
    #[serde(rename = "cep")]
    pub postal_code: String,

    /// Resolved address, embedded by value
    pub address: Address,
}

impl Contact {
    /// Create a contact from its parts.
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        display_name: impl Into<String>,
        postal_code: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            display_name: display_name.into(),
            postal_code: postal_code.into(),
            address,
        }
    }

    /// Whether the lowercased needle is a substring of any searchable field.
    ///
    /// Searchable fields: `user_name`, `display_name`, `address.city`,
    /// `address.region`. The needle must already be lowercased.
    pub fn matches_term(&self, needle: &str) -> bool {
        self.user_name.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
            || self.address.city.to_lowercase().contains(needle)
            || self.address.region.to_lowercase().contains(needle)
    }
}

/// Partial update for a contact.
///
/// Fields left as `None` keep their current value when merged. The id is
/// not updatable.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<Address>,
}

impl ContactPatch {
    /// Merge the present fields over an existing contact.
    pub fn merge_into(self, contact: &mut Contact) {
        if let Some(user_name) = self.user_name {
            contact.user_name = user_name;
        }
        if let Some(display_name) = self.display_name {
            contact.display_name = display_name;
        }
        if let Some(postal_code) = self.postal_code {
            contact.postal_code = postal_code;
        }
        if let Some(address) = self.address {
            contact.address = address;
        }
    }

    /// Patch that only renames the display name.
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            ..Self::default()
        }
    }
}
