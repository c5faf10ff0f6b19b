//! Data Transfer Objects for API requests and responses
//!
//! Complaint payloads serialize with camelCase field names; the wire shape
//! (including `createdAt`/`updatedAt`) is fixed by the existing frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grievance_core::types::Complaint;

// ============ Complaint DTOs ============

/// Submit complaint request
#[derive(Debug, Deserialize)]
pub struct SubmitComplaintRequest {
    /// Short summary
    pub title: String,
    /// Free-text body
    pub description: String,
    /// Optional severity label
    pub severity: Option<String>,
}

/// Submit complaint response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintResponse {
    pub success: bool,
    /// Whether the admin notification email went out; persistence succeeded
    /// either way
    pub email_sent: bool,
    pub message: String,
}

/// Complaint as returned to the admin panel
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Option<String>,
    pub status: String,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintResponse {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            title: complaint.title,
            description: complaint.description,
            severity: complaint.severity,
            status: complaint.status,
            response: complaint.response,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }
}

// ============ Admin DTOs ============

/// Admin login request
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// Admin login response
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
}

/// Respond to a complaint request
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    /// Complaint id to respond to
    pub id: String,
    /// Response text shown to the reporter
    pub response: String,
    /// New status label, free text
    pub status: String,
}

/// Respond to a complaint response
#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub success: bool,
}

// ============ Health DTOs ============

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
