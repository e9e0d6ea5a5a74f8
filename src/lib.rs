//! CEP Agenda - an address book backed by the ViaCEP postal-code lookup service.
//!
//! A caller submits a user name, a display name, and a raw CEP string; the
//! resolver normalizes and validates the code, performs a single HTTP lookup,
//! and the resulting contact is stored in an ordered in-memory list that is
//! snapshotted to a local key-value substrate on every mutation.
//!
//! # Architecture
//!
//! - **models**: Data structures for addresses, contacts, and toasts
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the ViaCEP service
//! - **resolver**: CEP normalization, validation, and lookup
//! - **repositories**: Key-value substrate and snapshot persistence
//! - **store**: Authoritative contact list with persistence on mutation
//! - **toast**: Self-expiring notification state machine
//! - **services**: Submission orchestration

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;
pub mod services;
pub mod store;
pub mod toast;

// Re-export commonly used types
pub use client::{AsyncCepClient, AsyncCepClientImpl, ViaCepClient};
pub use config::Config;
pub use error::{CepApiError, ConfigError, ResolveError, StorageError};
pub use models::{Address, Contact, ContactPatch, Toast, ToastKind};
pub use repositories::{
    FileKeyValueStore, JsonSnapshotRepository, KeyValueStore, MemoryKeyValueStore,
    SnapshotRepository,
};
pub use resolver::AddressResolver;
pub use services::{AgendaService, AgendaServiceImpl, SubmitOutcome};
pub use store::ContactStore;
pub use toast::ToastCenter;
