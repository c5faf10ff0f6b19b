//! Complaint persistence.
//!
//! Defines the storage contract for complaint records. Writes must succeed
//! before any notification side effect runs; the service layer depends on
//! that ordering.

pub mod memory;
pub mod sled;

use async_trait::async_trait;

use crate::error::StoreResult;
use grievance_core::types::{Complaint, NewComplaint};

/// Complaint storage interface.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Insert a new complaint. The store assigns the id and timestamps and
    /// the record starts in the pending status with no response.
    async fn insert(&self, input: NewComplaint) -> StoreResult<Complaint>;

    /// Fetch a complaint by id.
    async fn get(&self, id: &str) -> StoreResult<Option<Complaint>>;

    /// Overwrite `response` and `status` on the record with the given id and
    /// refresh its `updated_at`. An id that matches no record is a success
    /// no-op, not an error.
    async fn update_response(&self, id: &str, response: &str, status: &str) -> StoreResult<()>;

    /// All complaints, newest first by creation time.
    async fn list_all(&self) -> StoreResult<Vec<Complaint>>;
}

/// Order complaints newest-first; ties on the timestamp fall back to the id
/// so the ordering is deterministic.
pub(crate) fn sort_newest_first(complaints: &mut [Complaint]) {
    complaints.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

pub use self::sled::SledStore;
pub use memory::MemoryStore;
