//! Infrastructure layer for inquiry-concierge
//!
//! This crate contains the adapters that implement the ports defined in
//! the application layer (DynamoDB store, Bedrock model invoker, Bedrock
//! knowledge retriever) plus configuration file loading.

pub mod aws;
pub mod bedrock;
pub mod config;
pub mod store;

// Re-export commonly used types
pub use aws::load_sdk_config;
pub use bedrock::{BedrockKnowledgeRetriever, BedrockModelInvoker};
pub use config::{
    ConfigLoader, FileAwsConfig, FileConfig, FileKnowledgeBaseConfig, FileModelConfig,
    FileTableConfig,
};
pub use store::DynamoInquiryStore;
