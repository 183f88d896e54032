pub mod config;
pub mod report;
pub mod server;

pub use config::{Credentials, ProbeConfig, SortOrder};
pub use report::{Report, ReportRow, ServerStatus};
pub use server::{AuthOutcome, AuthenticatedServer, ServerDescriptor};
