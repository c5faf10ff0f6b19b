//! Complaint workflows.
//!
//! Owns the lifecycle: a complaint is created pending, and a single admin
//! response moves it to whatever status the admin wrote. Submission is
//! persist-then-notify; the stored record is the source of truth and a failed
//! email never rolls it back.

use std::sync::Arc;
use tracing::{error, info};

use crate::notify::{AdminNotifier, NotifyOutcome};
use grievance_core::types::{Complaint, NewComplaint};
use grievance_db::{ComplaintStore, StoreResult};

/// Result of a submission: the persisted record plus the independent
/// notification outcome.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub complaint: Complaint,
    pub notification: NotifyOutcome,
}

/// Orchestrates the store and the notifier.
pub struct ComplaintService {
    store: Arc<dyn ComplaintStore>,
    notifier: Arc<dyn AdminNotifier>,
}

impl ComplaintService {
    /// Create a new service
    pub fn new(store: Arc<dyn ComplaintStore>, notifier: Arc<dyn AdminNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Submit a complaint: persist first, then notify the admin best-effort.
    /// A storage failure aborts the operation before any notification is
    /// attempted; a notification failure is carried in the outcome.
    pub async fn submit(&self, input: NewComplaint) -> StoreResult<SubmitOutcome> {
        let complaint = self.store.insert(input).await.map_err(|e| {
            error!(operation = "submit", error = %e, "failed to persist complaint");
            e
        })?;

        info!(
            operation = "submit",
            complaint_id = %complaint.id,
            title = %complaint.title,
            "complaint submitted"
        );

        let notification = self.notifier.notify_new_complaint(&complaint).await;

        Ok(SubmitOutcome {
            complaint,
            notification,
        })
    }

    /// Record an admin response: sets `response` and `status` together. An
    /// unknown id is a success no-op, matching the store contract.
    pub async fn respond(&self, id: &str, response: &str, status: &str) -> StoreResult<()> {
        self.store
            .update_response(id, response, status)
            .await
            .map_err(|e| {
                error!(operation = "respond", complaint_id = %id, error = %e, "failed to record response");
                e
            })?;

        info!(
            operation = "respond",
            complaint_id = %id,
            status = %status,
            "complaint response recorded"
        );
        Ok(())
    }

    /// All complaints, newest first.
    pub async fn list(&self) -> StoreResult<Vec<Complaint>> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use grievance_db::MemoryStore;

    struct FailingNotifier;

    #[async_trait]
    impl AdminNotifier for FailingNotifier {
        async fn notify_new_complaint(&self, _complaint: &Complaint) -> NotifyOutcome {
            NotifyOutcome::Failed {
                reason: "relay unreachable".to_string(),
            }
        }
    }

    struct HappyNotifier;

    #[async_trait]
    impl AdminNotifier for HappyNotifier {
        async fn notify_new_complaint(&self, _complaint: &Complaint) -> NotifyOutcome {
            NotifyOutcome::Delivered
        }
    }

    fn input() -> NewComplaint {
        NewComplaint {
            title: "Leaky faucet".to_string(),
            description: "Kitchen".to_string(),
            severity: Some("Low".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_persists_and_notifies() {
        let service = ComplaintService::new(Arc::new(MemoryStore::new()), Arc::new(HappyNotifier));

        let outcome = service.submit(input()).await.unwrap();
        assert!(outcome.notification.delivered());
        assert!(outcome.complaint.is_pending());
    }

    #[tokio::test]
    async fn test_notification_failure_does_not_undo_persistence() {
        let service =
            ComplaintService::new(Arc::new(MemoryStore::new()), Arc::new(FailingNotifier));

        let outcome = service.submit(input()).await.unwrap();
        assert!(!outcome.notification.delivered());

        // The record survived the failed email.
        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, outcome.complaint.id);
    }

    #[tokio::test]
    async fn test_respond_sets_both_fields_together() {
        let service = ComplaintService::new(Arc::new(MemoryStore::new()), Arc::new(HappyNotifier));

        let outcome = service.submit(input()).await.unwrap();
        service
            .respond(&outcome.complaint.id, "Plumber dispatched", "Resolved")
            .await
            .unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all[0].response.as_deref(), Some("Plumber dispatched"));
        assert_eq!(all[0].status, "Resolved");
    }

    #[tokio::test]
    async fn test_respond_unknown_id_reports_success() {
        let service = ComplaintService::new(Arc::new(MemoryStore::new()), Arc::new(HappyNotifier));

        service
            .respond("missing-id", "text", "Closed")
            .await
            .unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
