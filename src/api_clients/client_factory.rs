use std::sync::Arc;

use log::info;
use reqwest::Client;

use crate::api_clients::portal_client::PortalClient;
use crate::auth::session_storage::{KeyringStorage, MemoryStorage, SessionStorage};
use crate::auth::SessionManager;
use crate::config::RuntimeConfig;
use crate::constants::USE_SESSION_STORAGE;
use crate::error::AppResult;
use crate::services::{
    AdminService, AttendanceService, AuthService, InvoiceService, LeaveService, ProfileService,
    TicketService,
};

/// Build the shared HTTP client. The portal imposes no client-side timeout;
/// the transport's defaults apply.
pub fn create_http_client() -> Client {
    Client::new()
}

/// Fully wired portal handle: one authenticated client behind one service per
/// backend resource. Intended to be created once and passed to the UI layer,
/// replacing ambient storage lookups.
#[derive(Debug)]
pub struct Portal {
    pub client: Arc<PortalClient>,
    pub sessions: Arc<SessionManager>,
    pub auth: AuthService,
    pub admin: AdminService,
    pub tickets: TicketService,
    pub invoices: InvoiceService,
    pub attendance: AttendanceService,
    pub leaves: LeaveService,
    pub profile: ProfileService,
}

impl Portal {
    /// Wire a portal from configuration. Development builds keep the session
    /// in memory; release builds persist it in the OS keyring.
    pub fn new(config: &RuntimeConfig) -> AppResult<Self> {
        let storage: Arc<dyn SessionStorage> = if USE_SESSION_STORAGE {
            Arc::new(MemoryStorage::default())
        } else {
            Arc::new(KeyringStorage)
        };
        Self::with_storage(config, storage)
    }

    /// Wire a portal over an explicit storage backend.
    pub fn with_storage(config: &RuntimeConfig, storage: Arc<dyn SessionStorage>) -> AppResult<Self> {
        info!("Creating portal client for {}", config.server_url);
        let sessions = Arc::new(SessionManager::new(storage));
        let client = Arc::new(PortalClient::new(config, Arc::clone(&sessions))?);

        Ok(Self {
            auth: AuthService::new(Arc::clone(&client), Arc::clone(&sessions)),
            admin: AdminService::new(Arc::clone(&client)),
            tickets: TicketService::new(Arc::clone(&client)),
            invoices: InvoiceService::new(Arc::clone(&client)),
            attendance: AttendanceService::new(Arc::clone(&client)),
            leaves: LeaveService::new(Arc::clone(&client)),
            profile: ProfileService::new(Arc::clone(&client)),
            client,
            sessions,
        })
    }
}
