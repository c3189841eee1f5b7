pub mod attendance;
pub mod invoice;
pub mod leave;
pub mod pagination;
pub mod ticket;
pub mod user;

pub use attendance::{AttendanceRecord, AttendanceReport, AttendanceUser};
pub use invoice::{Invoice, InvoiceItem, InvoiceListQuery, NewInvoice};
pub use leave::{LeaveRequest, NewLeave};
pub use pagination::Pagination;
pub use ticket::{NewTicket, Ticket, TicketListQuery, TicketMessage, TicketParty};
pub use user::{NewUser, Permission, Role, User, UserListQuery};
