//! CEP Agenda - Main entry point
//!
//! Thin command-line caller around the agenda service. Stands in for the
//! rendering layer: it collects input from argv, invokes the service, and
//! prints any toast the operation produced.

use anyhow::Result;
use cep_agenda::{
    AddressResolver, AgendaService, AgendaServiceImpl, AsyncCepClient, AsyncCepClientImpl, Config,
    ContactStore, FileKeyValueStore, JsonSnapshotRepository, SnapshotRepository, ToastCenter,
    ViaCepClient,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_contacts(contacts: &[cep_agenda::Contact]) {
    if contacts.is_empty() {
        println!("Nenhum contato encontrado");
        return;
    }
    for contact in contacts {
        println!(
            "{}  {} ({})\n    {}, {} - {} - {}  CEP: {}",
            contact.id,
            contact.user_name,
            contact.display_name,
            contact.address.street,
            contact.address.neighborhood,
            contact.address.city,
            contact.address.region,
            contact.postal_code,
        );
    }
}

fn print_toast(service: &dyn AgendaService) {
    if let Some(toast) = service.current_toast() {
        println!("[{}] {}", toast.kind, toast.message);
    }
}

fn usage() {
    eprintln!("Usage: cep-agenda <command> [args]");
    eprintln!("  add <user-name> <display-name> <cep>");
    eprintln!("  list");
    eprintln!("  search <term>");
    eprintln!("  remove <id>");
    eprintln!("  rename <id> <display-name>");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using lookup service at {}", config.viacep_base_url);

    let sync_client = ViaCepClient::new(&config);
    let client = Arc::new(AsyncCepClientImpl::new(sync_client)) as Arc<dyn AsyncCepClient>;
    let resolver = AddressResolver::new(client);

    let kv = Arc::new(FileKeyValueStore::new(config.data_dir.clone()));
    let repository = Arc::new(JsonSnapshotRepository::new(kv)) as Arc<dyn SnapshotRepository>;
    let store = ContactStore::load(repository)?;

    let toasts = ToastCenter::new(Duration::from_secs(config.toast_ttl_secs));
    let service = AgendaServiceImpl::new(resolver, store, toasts);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["add", user_name, display_name, cep] => {
            service.submit(user_name, display_name, cep).await?;
            print_toast(&service);
        }
        ["list"] => {
            print_contacts(&service.contacts().await);
        }
        ["search", term] => {
            print_contacts(&service.search(term).await);
        }
        ["remove", id] => {
            service.remove(id).await?;
            println!("Contato removido");
        }
        ["rename", id, display_name] => {
            service.rename(id, display_name).await?;
            println!("Contato atualizado");
        }
        _ => {
            usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
