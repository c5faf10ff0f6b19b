//! Grievance Portal API Server
//!
//! REST surface for complaint intake and the admin panel.
//!
//! ## Endpoints
//!
//! ### Public
//! - POST /api/complaint - Submit a complaint (persists, then notifies the
//!   admin by email best-effort)
//! - GET /health - Health check
//!
//! ### Admin
//! - POST /api/admin/login - Check the shared admin password
//! - GET /api/admin/complaints - List complaints, newest first
//! - POST /api/admin/complaint/respond - Record a response and status
//!
//! The admin routes share the public router: only the login endpoint checks
//! the password. See [`auth`] for the access model.

pub mod auth;
pub mod dto;
pub mod error;
pub mod notify;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;

pub use auth::AdminGate;
pub use dto::*;
pub use error::{ApiError, ApiResult};
pub use notify::{AdminNotifier, NotifyError, NotifyOutcome, SmtpNotifier};
pub use routes::create_router;
pub use server::{create_server, run_server, start_background_server};
pub use service::{ComplaintService, SubmitOutcome};
pub use state::AppState;
