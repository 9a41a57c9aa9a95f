//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Review text is empty or missing")]
    EmptyReviewText,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}
