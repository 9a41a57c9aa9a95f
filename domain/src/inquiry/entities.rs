//! Inquiry record entity and partial-update value object
//!
//! Field names serialize in camelCase to match the store's attribute names
//! (`reviewText`, `mailAddress`, `createdAt`, ...).

use super::category::Category;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A persisted customer inquiry (Entity)
///
/// `id` and `created_at` are assigned once at ingestion and never mutated.
/// `answer` and `category` start absent and are each filled in by exactly
/// one enrichment stage; re-running a stage overwrites its own field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    /// Opaque unique identifier, immutable once created
    pub id: String,
    /// Contact address of the submitter (pass-through, not used by enrichment)
    pub mail_address: String,
    /// Name of the submitter (pass-through)
    pub user_name: String,
    /// The inquiry body; must be non-empty for any enrichment to proceed
    pub review_text: String,
    /// Generated reply, absent until the first successful answer generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Assigned category, absent until the first successful classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// ISO-8601 creation timestamp, immutable
    pub created_at: String,
    /// ISO-8601 timestamp of the last field write
    pub updated_at: String,
}

impl InquiryRecord {
    /// Create a freshly ingested record. `answer` and `category` start unset
    /// and both timestamps start equal.
    pub fn new(
        id: impl Into<String>,
        mail_address: impl Into<String>,
        user_name: impl Into<String>,
        review_text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.into();
        Self {
            id: id.into(),
            mail_address: mail_address.into(),
            user_name: user_name.into(),
            review_text: review_text.into(),
            answer: None,
            category: None,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Check that the record is eligible for enrichment.
    ///
    /// A record with an empty or whitespace-only `review_text` is never
    /// enriched; both orchestrators reject it before touching the model.
    pub fn validate_for_enrichment(&self) -> Result<(), DomainError> {
        if self.review_text.trim().is_empty() {
            return Err(DomainError::EmptyReviewText);
        }
        Ok(())
    }
}

/// A narrow, atomic partial update to an inquiry record
///
/// Carries only the fields a single enrichment stage writes. The store must
/// apply all fields of one patch together or none. `updated_at` is always
/// present; `answer` and `category` are set by their respective stages only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryPatch {
    pub answer: Option<String>,
    pub category: Option<Category>,
    pub updated_at: String,
}

impl InquiryPatch {
    /// Patch written by the answer enrichment stage.
    pub fn answer(answer: impl Into<String>, updated_at: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            category: None,
            updated_at: updated_at.into(),
        }
    }

    /// Patch written by the classification stage.
    pub fn category(category: Category, updated_at: impl Into<String>) -> Self {
        Self {
            answer: None,
            category: Some(category),
            updated_at: updated_at.into(),
        }
    }

    /// Apply this patch to an in-memory record (mirrors what the store does
    /// durably). Useful for tests and read-back-free flows.
    pub fn apply(&self, record: &mut InquiryRecord) {
        if let Some(ref answer) = self.answer {
            record.answer = Some(answer.clone());
        }
        if let Some(category) = self.category {
            record.category = Some(category);
        }
        record.updated_at = self.updated_at.clone();
    }
}
