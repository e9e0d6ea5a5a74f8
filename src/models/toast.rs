//! Transient notification shown after user-facing events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Warning => write!(f, "warning"),
        }
    }
}

/// A transient notification. At most one is live at a time; it self-expires
/// after a fixed window (see `toast::ToastCenter`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let toast = Toast::new("Endereço adicionado com sucesso", ToastKind::Success);
        let value = serde_json::to_value(&toast).unwrap();
        assert_eq!(value["type"], "success");
        assert_eq!(value["message"], "Endereço adicionado com sucesso");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ToastKind::Warning.to_string(), "warning");
    }
}
