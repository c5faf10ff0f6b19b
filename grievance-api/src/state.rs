//! Application state for the API server

use std::sync::Arc;

use crate::auth::AdminGate;
use crate::service::ComplaintService;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Complaint workflows
    pub service: Arc<ComplaintService>,
    /// Shared-secret admin gate
    pub gate: AdminGate,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state
    pub fn new(service: Arc<ComplaintService>, gate: AdminGate) -> Self {
        Self {
            service,
            gate,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
