//! Client library for the university portal backend.
//!
//! Every outbound call goes through one authenticated [`PortalClient`]:
//! bearer-token attachment, base-URL resolution, and error normalization
//! happen exactly once instead of at each call-site. Typed services cover the
//! portal's resources (tickets, invoices, users, attendance, grades, leaves,
//! profile) on top of it, and [`Portal`] wires the whole thing up from
//! configuration.
//!
//! ```no_run
//! use portal_client::{Portal, RuntimeConfig};
//!
//! # async fn run() -> portal_client::AppResult<()> {
//! let portal = Portal::new(&RuntimeConfig::from_env())?;
//! let profile = portal.auth.login("admin@example.com", "secret").await?;
//! let open = portal
//!     .tickets
//!     .list(&portal_client::models::TicketListQuery::with_status("open"))
//!     .await?;
//! println!("{} open tickets for {}", open.tickets.len(), profile.name);
//! # Ok(())
//! # }
//! ```

pub mod api_clients;
pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use api_clients::client_factory::Portal;
pub use api_clients::portal_client::PortalClient;
pub use api_clients::request::{RequestBody, RequestDescriptor};
pub use api_clients::response::ApiSuccess;
pub use auth::{Session, SessionManager, SessionStorage, UserProfile};
pub use config::RuntimeConfig;
pub use error::{AppError, AppResult, SerializableError};
