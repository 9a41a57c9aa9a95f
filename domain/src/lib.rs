//! Domain layer for inquiry-concierge
//!
//! This crate contains the core business logic of the inquiry enrichment
//! pipeline: the inquiry record entity, the closed category taxonomy with
//! its normalization rules, and the prompt templates for answer generation
//! and classification. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.

pub mod core;
pub mod inquiry;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use inquiry::{
    category::Category,
    entities::{InquiryPatch, InquiryRecord},
};
pub use prompt::template::{PromptTemplate, ANSWER_MAX_TOKENS, CLASSIFICATION_MAX_TOKENS};
