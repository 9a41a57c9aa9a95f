//! Generative model invoker port
//!
//! Synchronous single-shot text generation. Model identity and version are
//! fixed adapter configuration, not chosen per call. Retry policy, if any,
//! belongs to the implementation behind this port — the use cases never
//! retry.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during model invocation
#[derive(Error, Debug)]
pub enum InvokerError {
    #[error("Model request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned no usable content")]
    EmptyOutput,
}

/// Generated text from a single model invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutput {
    pub text: String,
}

impl ModelOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Gateway for invoking the generative model
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send a fully-formed prompt and return the generated text, bounded by
    /// `max_output_tokens`.
    async fn invoke(&self, prompt: &str, max_output_tokens: u32)
        -> Result<ModelOutput, InvokerError>;
}
