//! Knowledge retriever port
//!
//! Optional collaborator: present iff a knowledge base is configured.
//! Absence of a retriever disables retrieval augmentation entirely (a
//! feature flag, not a failure); a configured retriever that fails at
//! lookup time surfaces an error instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during knowledge retrieval
#[derive(Error, Debug)]
pub enum RetrieverError {
    #[error("Retrieval request failed: {0}")]
    RequestFailed(String),
}

/// A single retrieved text passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
}

impl Passage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Retrieval gateway over a knowledge base
#[async_trait]
pub trait KnowledgeRetriever: Send + Sync {
    /// Return up to `top_k` passages relevant to `query`, most relevant
    /// first. An empty result is valid, not an error.
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<Passage>, RetrieverError>;
}
