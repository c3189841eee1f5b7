pub mod admin_service;
pub mod attendance_service;
pub mod auth_service;
pub mod invoice_service;
pub mod leave_service;
pub mod profile_service;
pub mod ticket_service;

pub use admin_service::{AdminService, UserPage};
pub use attendance_service::AttendanceService;
pub use auth_service::AuthService;
pub use invoice_service::{InvoicePage, InvoiceService};
pub use leave_service::LeaveService;
pub use profile_service::ProfileService;
pub use ticket_service::{TicketPage, TicketService};
