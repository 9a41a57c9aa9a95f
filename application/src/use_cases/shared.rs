//! Error taxonomy and helpers shared by the enrichment use cases

use crate::ports::inquiry_store::{InquiryStore, StoreError};
use crate::ports::knowledge_retriever::RetrieverError;
use crate::ports::model_invoker::InvokerError;
use concierge_domain::InquiryRecord;
use thiserror::Error;
use tracing::debug;

/// Structured failure reported by the enrichment use cases
///
/// Every failure path maps to exactly one of these kinds; nothing is
/// swallowed and nothing panics. None of them trigger an internal retry —
/// each invocation is idempotent per field, so the caller may simply
/// re-invoke.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// Client-correctable input problem (missing id, empty review text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No record exists for the given id
    #[error("Inquiry with id {0} not found")]
    NotFound(String),

    /// The configured knowledge lookup failed. Deliberately not downgraded
    /// to the no-context prompt path: a missing knowledge base disables
    /// retrieval, a failing one surfaces here.
    #[error("Knowledge retrieval failed: {0}")]
    Retrieval(#[from] RetrieverError),

    /// The generation/classification call failed or returned unusable content
    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] InvokerError),

    /// A store read or write failed. On the write path the freshly generated
    /// result is lost and must be regenerated by re-invoking the use case.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl EnrichError {
    /// Check whether the failure is correctable by the client.
    pub fn is_client_error(&self) -> bool {
        matches!(self, EnrichError::InvalidInput(_) | EnrichError::NotFound(_))
    }
}

/// Fetch a record and check it is eligible for enrichment.
///
/// Shared front half of both orchestrators: rejects a blank id, maps an
/// absent record to [`EnrichError::NotFound`], and refuses records with an
/// empty `reviewText` before any model invocation happens.
pub(crate) async fn load_enrichable(
    store: &dyn InquiryStore,
    id: &str,
) -> Result<InquiryRecord, EnrichError> {
    if id.trim().is_empty() {
        return Err(EnrichError::InvalidInput(
            "Missing required parameter: id".to_string(),
        ));
    }

    let record = store
        .get(id)
        .await?
        .ok_or_else(|| EnrichError::NotFound(id.to_string()))?;

    record
        .validate_for_enrichment()
        .map_err(|e| EnrichError::InvalidInput(e.to_string()))?;

    debug!(id = %record.id, "Loaded inquiry for enrichment");
    Ok(record)
}

/// Current UTC timestamp in RFC 3339, used for `updatedAt` stamping.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
