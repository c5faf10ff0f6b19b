//! Shared domain types.

mod complaint;

pub use complaint::{Complaint, NewComplaint, SEVERITY_NOT_SPECIFIED, STATUS_PENDING};
