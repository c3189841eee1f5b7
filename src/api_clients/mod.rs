pub mod client_factory;
pub mod error_handling;
pub mod portal_client;
pub mod request;
pub mod response;

pub use client_factory::Portal;
pub use portal_client::PortalClient;
pub use request::{RequestBody, RequestDescriptor};
pub use response::ApiSuccess;
