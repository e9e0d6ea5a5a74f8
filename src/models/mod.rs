//! Data models for the CEP agenda.
//!
//! This module contains the data structures representing addresses, contacts,
//! and transient notifications.

pub mod address;
pub mod contact;
pub mod toast;

pub use address::Address;
pub use contact::{Contact, ContactPatch};
pub use toast::{Toast, ToastKind};
