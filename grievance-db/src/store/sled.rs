//! Sled-backed persistent store implementation.

use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use tracing::debug;

use super::{sort_newest_first, ComplaintStore};
use crate::error::{StoreError, StoreResult};
use grievance_core::types::{Complaint, NewComplaint};

const COMPLAINTS_TREE: &str = "complaints";

/// Persistent store using the sled embedded database. Records are stored as
/// JSON values keyed by complaint id.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: sled::Db,
    complaints: sled::Tree,
}

impl SledStore {
    /// Open or create the database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path)
            .map_err(|e| StoreError::Backend(format!("Failed to open sled db: {}", e)))?;
        let complaints = db
            .open_tree(COMPLAINTS_TREE)
            .map_err(|e| StoreError::Backend(format!("Failed to open complaints tree: {}", e)))?;

        Ok(Self { db, complaints })
    }

    /// Clear all records
    pub fn clear(&self) -> StoreResult<()> {
        self.complaints
            .clear()
            .map_err(|e| StoreError::Backend(format!("Failed to clear complaints: {}", e)))?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> StoreResult<()> {
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(format!("Failed to flush db: {}", e)))?;
        Ok(())
    }

    fn serialize(complaint: &Complaint) -> StoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(complaint)?)
    }

    fn deserialize(bytes: &[u8]) -> StoreResult<Complaint> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn read(&self, id: &str) -> StoreResult<Option<Complaint>> {
        match self
            .complaints
            .get(id.as_bytes())
            .map_err(|e| StoreError::Backend(format!("Failed to get complaint: {}", e)))?
        {
            Some(bytes) => Ok(Some(Self::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write(&self, complaint: &Complaint) -> StoreResult<()> {
        let value = Self::serialize(complaint)?;
        self.complaints
            .insert(complaint.id.as_bytes(), value)
            .map_err(|e| StoreError::Backend(format!("Failed to save complaint: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl ComplaintStore for SledStore {
    async fn insert(&self, input: NewComplaint) -> StoreResult<Complaint> {
        let complaint = Complaint::create(input);
        self.write(&complaint)?;
        Ok(complaint)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Complaint>> {
        self.read(id)
    }

    async fn update_response(&self, id: &str, response: &str, status: &str) -> StoreResult<()> {
        match self.read(id)? {
            Some(mut complaint) => {
                complaint.response = Some(response.to_string());
                complaint.status = status.to_string();
                complaint.updated_at = Utc::now();
                self.write(&complaint)?;
            }
            None => {
                debug!(complaint_id = %id, "response update matched no record");
            }
        }
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Complaint>> {
        let mut all = Vec::new();
        for entry in self.complaints.iter() {
            let (_, bytes) =
                entry.map_err(|e| StoreError::Backend(format!("Failed to scan complaints: {}", e)))?;
            all.push(Self::deserialize(&bytes)?);
        }
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
            severity: Some("Low".to_string()),
        }
    }

    fn open_temp() -> (tempfile::TempDir, SledStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let (_dir, store) = open_temp();
        let complaint = store.insert(input("flickering light")).await.unwrap();

        let fetched = store.get(&complaint.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "flickering light");
        assert_eq!(fetched.severity.as_deref(), Some("Low"));
        assert_eq!(fetched.status, STATUS_PENDING);
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let store = SledStore::open(dir.path()).unwrap();
            let complaint = store.insert(input("cold water")).await.unwrap();
            store.flush().unwrap();
            complaint.id
        };

        let reopened = SledStore::open(dir.path()).unwrap();
        let fetched = reopened.get(&id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "cold water");
    }

    #[tokio::test]
    async fn test_update_response_persists_both_fields() {
        let (_dir, store) = open_temp();
        let complaint = store.insert(input("noise")).await.unwrap();

        store
            .update_response(&complaint.id, "Plumber dispatched", "Resolved")
            .await
            .unwrap();

        let updated = store.get(&complaint.id).await.unwrap().unwrap();
        assert_eq!(updated.response.as_deref(), Some("Plumber dispatched"));
        assert_eq!(updated.status, "Resolved");
        assert_eq!(updated.created_at, complaint.created_at);
    }

    #[tokio::test]
    async fn test_update_response_unknown_id_is_noop() {
        let (_dir, store) = open_temp();
        store.insert(input("one")).await.unwrap();

        store
            .update_response("missing-id", "text", "Closed")
            .await
            .unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let (_dir, store) = open_temp();
        for i in 0..4 {
            store.insert(input(&format!("complaint {i}"))).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 4);
        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
