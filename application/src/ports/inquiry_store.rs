//! Inquiry store port
//!
//! Key-value persistence for inquiry records with last-write-wins semantics
//! per field. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use concierge_domain::{InquiryPatch, InquiryRecord};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    RequestFailed(String),

    #[error("Stored record is malformed: {0}")]
    MalformedRecord(String),
}

/// Persistence gateway for inquiry records
///
/// `update_fields` must apply the whole patch atomically: all fields of one
/// call land together or none do. Concurrent writers are not coordinated
/// beyond per-field last-write-wins.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Fetch a record by id. `Ok(None)` means no record exists for the id;
    /// errors are reserved for transport or decoding failures.
    async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError>;

    /// Persist a complete new record.
    async fn put(&self, record: &InquiryRecord) -> Result<(), StoreError>;

    /// Apply a narrow partial update to an existing record.
    async fn update_fields(&self, id: &str, patch: &InquiryPatch) -> Result<(), StoreError>;
}
