//! Grievance Portal Core
//!
//! Domain types and process configuration for the grievance portal backend.
//! The other crates layer storage (`grievance-db`) and the HTTP surface
//! (`grievance-api`) on top of these definitions.

pub mod config;
pub mod types;

pub use config::{AppConfig, MailerConfig};
pub use types::{Complaint, NewComplaint, SEVERITY_NOT_SPECIFIED, STATUS_PENDING};
