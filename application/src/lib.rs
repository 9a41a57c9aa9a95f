//! Application layer for inquiry-concierge
//!
//! This crate contains the enrichment use cases and the port definitions
//! their collaborators must implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    inquiry_store::{InquiryStore, StoreError},
    knowledge_retriever::{KnowledgeRetriever, Passage, RetrieverError},
    model_invoker::{InvokerError, ModelInvoker, ModelOutput},
};
pub use use_cases::classify_inquiry::{ClassifyInquiryInput, ClassifyInquiryUseCase, Classified};
pub use use_cases::generate_answer::{
    GenerateAnswerInput, GenerateAnswerUseCase, GeneratedAnswer,
};
pub use use_cases::ingest_inquiry::{
    IngestError, IngestInquiryInput, IngestInquiryUseCase, IngestedInquiry,
};
pub use use_cases::shared::EnrichError;
