//! Complaint intake endpoint

use axum::{extract::State, Json};

use crate::dto::{SubmitComplaintRequest, SubmitComplaintResponse};
use crate::error::ApiResult;
use crate::notify::NotifyOutcome;
use crate::state::AppState;
use grievance_core::types::NewComplaint;

/// Submit a new complaint
///
/// Persistence failure is the only error path; a failed notification email
/// still yields an overall success with `emailSent: false`.
pub async fn submit_complaint(
    State(state): State<AppState>,
    Json(req): Json<SubmitComplaintRequest>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    let outcome = state
        .service
        .submit(NewComplaint {
            title: req.title,
            description: req.description,
            severity: req.severity,
        })
        .await?;

    let (email_sent, message) = match outcome.notification {
        NotifyOutcome::Delivered => (
            true,
            "Complaint submitted! The administrator has been notified via email.".to_string(),
        ),
        NotifyOutcome::Failed { .. } => (
            false,
            "Complaint submitted, but the notification email could not be sent.".to_string(),
        ),
    };

    Ok(Json(SubmitComplaintResponse {
        success: true,
        email_sent,
        message,
    }))
}
