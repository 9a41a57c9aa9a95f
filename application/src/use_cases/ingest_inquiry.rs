//! Ingest Inquiry use case.
//!
//! Accepts a new customer inquiry, validates the required fields, assigns a
//! fresh UUID and creation timestamp, and persists the record. Enrichment
//! (answer generation, classification) happens later via the other use
//! cases against the returned id.

use crate::ports::inquiry_store::{InquiryStore, StoreError};
use crate::use_cases::shared::now_timestamp;
use concierge_domain::{DomainError, InquiryRecord};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors that can occur during inquiry ingestion.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Client-correctable input problem (missing required fields)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Saving the new record failed
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

/// Input for the [`IngestInquiryUseCase`].
#[derive(Debug, Clone)]
pub struct IngestInquiryInput {
    pub mail_address: String,
    pub user_name: String,
    pub review_text: String,
}

impl IngestInquiryInput {
    pub fn new(
        mail_address: impl Into<String>,
        user_name: impl Into<String>,
        review_text: impl Into<String>,
    ) -> Self {
        Self {
            mail_address: mail_address.into(),
            user_name: user_name.into(),
            review_text: review_text.into(),
        }
    }

    /// Collect the names of required fields that are empty or missing.
    fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.mail_address.trim().is_empty() {
            missing.push("mailAddress".to_string());
        }
        if self.user_name.trim().is_empty() {
            missing.push("userName".to_string());
        }
        if self.review_text.trim().is_empty() {
            missing.push("reviewText".to_string());
        }
        missing
    }
}

/// Successful outcome: the id assigned to the new inquiry.
#[derive(Debug, Clone, Serialize)]
pub struct IngestedInquiry {
    pub id: String,
}

/// Use case for persisting a newly submitted inquiry.
pub struct IngestInquiryUseCase {
    store: Arc<dyn InquiryStore>,
}

impl IngestInquiryUseCase {
    pub fn new(store: Arc<dyn InquiryStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new inquiry, returning its generated id.
    pub async fn execute(&self, input: IngestInquiryInput) -> Result<IngestedInquiry, IngestError> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(IngestError::InvalidInput(
                DomainError::MissingFields(missing).to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let record = InquiryRecord::new(
            id.clone(),
            input.mail_address,
            input.user_name,
            input.review_text,
            now_timestamp(),
        );

        self.store.put(&record).await?;

        info!(id = %id, "Inquiry saved");
        Ok(IngestedInquiry { id })
    }
}
