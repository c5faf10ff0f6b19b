//! Admin panel endpoints

use axum::{extract::State, Json};
use tracing::warn;

use crate::dto::{
    AdminLoginRequest, AdminLoginResponse, ComplaintResponse, RespondRequest, RespondResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Check the shared admin password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> ApiResult<Json<AdminLoginResponse>> {
    if state.gate.verify(&req.password) {
        Ok(Json(AdminLoginResponse { success: true }))
    } else {
        warn!(operation = "admin_login", "admin login rejected");
        Err(ApiError::Unauthorized)
    }
}

/// List all complaints, newest first
pub async fn list_complaints(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ComplaintResponse>>> {
    let complaints = state.service.list().await?;

    Ok(Json(
        complaints.into_iter().map(ComplaintResponse::from).collect(),
    ))
}

/// Record a response and new status for a complaint
pub async fn respond(
    State(state): State<AppState>,
    Json(req): Json<RespondRequest>,
) -> ApiResult<Json<RespondResponse>> {
    state
        .service
        .respond(&req.id, &req.response, &req.status)
        .await?;

    Ok(Json(RespondResponse { success: true }))
}
