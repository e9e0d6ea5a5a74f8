//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! resolver, the contact store, and the notification surface. They provide a
//! clean boundary between the caller (CLI or UI) and the data access layer.

mod agenda_service;

pub use agenda_service::{AgendaService, AgendaServiceImpl, SubmitOutcome};
