//! Complaint record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status every complaint carries at creation, before an admin responds.
pub const STATUS_PENDING: &str = "Pending";

/// Severity label used in notifications when the reporter left it blank.
pub const SEVERITY_NOT_SPECIFIED: &str = "Not specified";

/// A complaint record as persisted by the store.
///
/// `id` is assigned exactly once at insert and never changes. `status` is a
/// free-text label: it starts as [`STATUS_PENDING`] and admins may write any
/// string when responding — no enumeration is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    /// Store-assigned opaque identifier (UUID v4 string)
    pub id: String,
    /// Short summary supplied by the reporter
    pub title: String,
    /// Free-text body supplied by the reporter
    pub description: String,
    /// Optional free-form severity label
    pub severity: Option<String>,
    /// Lifecycle label, free text beyond the initial default
    pub status: String,
    /// Admin response text, absent until the respond operation runs
    pub response: Option<String>,
    /// Set by the store at insert
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every update
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a complaint record.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub severity: Option<String>,
}

impl Complaint {
    /// Build a fresh record from submission input, assigning the id and
    /// timestamps. Called by store implementations at insert.
    pub fn create(input: NewComplaint) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            severity: input.severity,
            status: STATUS_PENDING.to_string(),
            response: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the complaint still awaits an admin response.
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    /// Severity for display in notifications; blank and absent labels both
    /// render as [`SEVERITY_NOT_SPECIFIED`].
    pub fn severity_label(&self) -> &str {
        match self.severity.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => SEVERITY_NOT_SPECIFIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewComplaint {
        NewComplaint {
            title: "Leaky faucet".to_string(),
            description: "Kitchen".to_string(),
            severity: Some("Low".to_string()),
        }
    }

    #[test]
    fn test_create_assigns_defaults() {
        let complaint = Complaint::create(input());
        assert!(!complaint.id.is_empty());
        assert_eq!(complaint.status, STATUS_PENDING);
        assert!(complaint.is_pending());
        assert!(complaint.response.is_none());
        assert_eq!(complaint.created_at, complaint.updated_at);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let a = Complaint::create(input());
        let b = Complaint::create(input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_severity_label() {
        let mut complaint = Complaint::create(input());
        assert_eq!(complaint.severity_label(), "Low");

        complaint.severity = None;
        assert_eq!(complaint.severity_label(), SEVERITY_NOT_SPECIFIED);

        complaint.severity = Some("   ".to_string());
        assert_eq!(complaint.severity_label(), SEVERITY_NOT_SPECIFIED);
    }
}
