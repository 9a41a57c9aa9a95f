//! Classify Inquiry use case.
//!
//! The classification orchestrator: loads an inquiry, composes the
//! taxonomy prompt, invokes the model with the classification token budget,
//! normalizes the raw output into the closed category set, and persists the
//! result. No retrieval is involved in this stage.

use crate::ports::inquiry_store::InquiryStore;
use crate::ports::model_invoker::{InvokerError, ModelInvoker};
use crate::use_cases::shared::{load_enrichable, now_timestamp, EnrichError};
use concierge_domain::{Category, InquiryPatch, PromptTemplate, CLASSIFICATION_MAX_TOKENS};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the [`ClassifyInquiryUseCase`].
#[derive(Debug, Clone)]
pub struct ClassifyInquiryInput {
    /// Id of the inquiry to classify.
    pub id: String,
}

impl ClassifyInquiryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Successful outcome: the persisted category and its inquiry id.
#[derive(Debug, Clone, Serialize)]
pub struct Classified {
    pub id: String,
    pub category: Category,
}

/// Use case for assigning a canonical category to an inquiry.
///
/// The persisted value is always one of the five closed categories, never
/// the raw model text: [`Category::from_raw`] scans the canonical labels in
/// priority order and falls back to `Other`. An empty model response is a
/// model-invocation error rather than a default category.
pub struct ClassifyInquiryUseCase {
    store: Arc<dyn InquiryStore>,
    invoker: Arc<dyn ModelInvoker>,
}

impl ClassifyInquiryUseCase {
    pub fn new(store: Arc<dyn InquiryStore>, invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { store, invoker }
    }

    /// Execute the classification pass for one inquiry.
    pub async fn execute(&self, input: ClassifyInquiryInput) -> Result<Classified, EnrichError> {
        let record = load_enrichable(self.store.as_ref(), &input.id).await?;

        let prompt = PromptTemplate::classification_prompt(&record.review_text);
        let output = self
            .invoker
            .invoke(&prompt, CLASSIFICATION_MAX_TOKENS)
            .await?;

        if output.text.trim().is_empty() {
            return Err(InvokerError::EmptyOutput.into());
        }

        let category = Category::from_raw(&output.text);
        debug!(
            id = %record.id,
            raw = %output.text.trim(),
            category = %category,
            "Normalized classification output"
        );

        let patch = InquiryPatch::category(category, now_timestamp());
        self.store.update_fields(&record.id, &patch).await?;

        info!(id = %record.id, category = %category, "Inquiry classified and saved");
        Ok(Classified {
            id: record.id,
            category,
        })
    }
}
