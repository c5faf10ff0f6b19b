//! API route handlers

pub mod admin;
pub mod complaint;
pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Public intake endpoint
        .route("/api/complaint", post(complaint::submit_complaint))
        // Admin endpoints
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/complaints", get(admin::list_complaints))
        .route("/api/admin/complaint/respond", post(admin::respond))
        // State
        .with_state(state)
}
