//! Agenda service layer.
//!
//! Business logic for contact submission: field validation, CEP resolution,
//! store mutation, and toast notifications. The caller is expected to keep at
//! most one submission in flight at a time.

use crate::error::StorageResult;
use crate::models::{Contact, ContactPatch, Toast, ToastKind};
use crate::resolver::{normalize_cep, AddressResolver};
use crate::store::ContactStore;
use crate::toast::ToastCenter;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Contact was resolved, stored, and a success toast was shown
    Added(Contact),

    /// A required field was blank; no resolution was attempted
    MissingFields,

    /// Resolution failed (bad shape, transport failure, or unknown CEP)
    CepNotFound,
}

/// Agenda operations exposed to the caller.
#[async_trait]
pub trait AgendaService: Send + Sync {
    /// Submit a new contact from raw form input.
    async fn submit(
        &self,
        user_name: &str,
        display_name: &str,
        cep: &str,
    ) -> StorageResult<SubmitOutcome>;

    /// Delete a contact by id. A missing id is a silent no-op.
    async fn remove(&self, id: &str) -> StorageResult<()>;

    /// Rename the display name of a contact. A missing id is a no-op.
    async fn rename(&self, id: &str, new_display_name: &str) -> StorageResult<()>;

    /// Filtered view of the contact list.
    async fn search(&self, term: &str) -> Vec<Contact>;

    /// The full contact list in insertion order.
    async fn contacts(&self) -> Vec<Contact>;

    /// The live toast, if any.
    fn current_toast(&self) -> Option<Toast>;
}

/// Default implementation of AgendaService.
pub struct AgendaServiceImpl {
    resolver: AddressResolver,
    store: RwLock<ContactStore>,
    toasts: ToastCenter,
}

impl AgendaServiceImpl {
    pub fn new(resolver: AddressResolver, store: ContactStore, toasts: ToastCenter) -> Self {
        Self {
            resolver,
            store: RwLock::new(store),
            toasts,
        }
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl AgendaService for AgendaServiceImpl {
    async fn submit(
        &self,
        user_name: &str,
        display_name: &str,
        cep: &str,
    ) -> StorageResult<SubmitOutcome> {
        if user_name.trim().is_empty() || display_name.trim().is_empty() || cep.trim().is_empty() {
            self.toasts.show("Preencha todos os campos", ToastKind::Error);
            return Ok(SubmitOutcome::MissingFields);
        }

        let address = match self.resolver.resolve(cep).await {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!("Submission rejected: {}", e);
                self.toasts.show("CEP não encontrado", ToastKind::Error);
                return Ok(SubmitOutcome::CepNotFound);
            }
        };

        let contact = Contact::new(
            Self::generate_id(),
            user_name,
            display_name,
            normalize_cep(cep),
            address,
        );

        {
            let mut store = self.store.write().await;
            store.add_contact(contact.clone())?;
        }

        tracing::info!("Contact added: {}", contact.id);
        self.toasts
            .show("Endereço adicionado com sucesso", ToastKind::Success);
        Ok(SubmitOutcome::Added(contact))
    }

    async fn remove(&self, id: &str) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.delete_contact(id)
    }

    async fn rename(&self, id: &str, new_display_name: &str) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.update_contact(id, ContactPatch::display_name(new_display_name))
    }

    async fn search(&self, term: &str) -> Vec<Contact> {
        let store = self.store.read().await;
        store
            .filter_contacts(term)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn contacts(&self) -> Vec<Contact> {
        let store = self.store.read().await;
        store.contacts().to_vec()
    }

    fn current_toast(&self) -> Option<Toast> {
        self.toasts.current()
    }
}
