//! In-memory store implementation, for tests and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{sort_newest_first, ComplaintStore};
use crate::error::StoreResult;
use grievance_core::types::{Complaint, NewComplaint};

/// Thread-safe in-memory store, using an RwLock-protected map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    complaints: Arc<RwLock<HashMap<String, Complaint>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all records
    pub async fn clear(&self) {
        self.complaints.write().await.clear();
    }
}

#[async_trait]
impl ComplaintStore for MemoryStore {
    async fn insert(&self, input: NewComplaint) -> StoreResult<Complaint> {
        let complaint = Complaint::create(input);
        let mut complaints = self.complaints.write().await;
        complaints.insert(complaint.id.clone(), complaint.clone());
        Ok(complaint)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Complaint>> {
        let complaints = self.complaints.read().await;
        Ok(complaints.get(id).cloned())
    }

    async fn update_response(&self, id: &str, response: &str, status: &str) -> StoreResult<()> {
        let mut complaints = self.complaints.write().await;
        match complaints.get_mut(id) {
            Some(complaint) => {
                complaint.response = Some(response.to_string());
                complaint.status = status.to_string();
                complaint.updated_at = Utc::now();
            }
            None => {
                debug!(complaint_id = %id, "response update matched no record");
            }
        }
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Complaint>> {
        let complaints = self.complaints.read().await;
        let mut all: Vec<Complaint> = complaints.values().cloned().collect();
        sort_newest_first(&mut all);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grievance_core::types::STATUS_PENDING;

    fn input(title: &str) -> NewComplaint {
        NewComplaint {
            title: title.to_string(),
            description: "details".to_string(),
            severity: None,
        }
    }

    #[tokio::test]
    async fn test_insert_sets_defaults() {
        let store = MemoryStore::new();
        let complaint = store.insert(input("broken door")).await.unwrap();

        assert_eq!(complaint.status, STATUS_PENDING);
        assert!(complaint.response.is_none());

        let fetched = store.get(&complaint.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "broken door");
    }

    #[tokio::test]
    async fn test_update_response_sets_both_fields() {
        let store = MemoryStore::new();
        let complaint = store.insert(input("noise")).await.unwrap();

        store
            .update_response(&complaint.id, "talked to the neighbor", "Resolved")
            .await
            .unwrap();

        let updated = store.get(&complaint.id).await.unwrap().unwrap();
        assert_eq!(updated.response.as_deref(), Some("talked to the neighbor"));
        assert_eq!(updated.status, "Resolved");
        assert_eq!(updated.created_at, complaint.created_at);
        assert!(updated.updated_at >= complaint.updated_at);
    }

    #[tokio::test]
    async fn test_update_response_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.insert(input("one")).await.unwrap();

        store
            .update_response("missing-id", "text", "Closed")
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, STATUS_PENDING);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert(input(&format!("complaint {i}"))).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
