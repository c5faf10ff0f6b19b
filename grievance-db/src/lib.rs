//! Grievance Portal Storage Layer
//!
//! Durable record of complaints, keyed by a store-assigned opaque id. The
//! [`ComplaintStore`] trait is the storage contract; two implementations are
//! provided:
//!
//! - [`MemoryStore`] — in-memory, for tests and development
//! - [`SledStore`] — persistent, backed by the sled embedded database

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ComplaintStore, MemoryStore, SledStore};
