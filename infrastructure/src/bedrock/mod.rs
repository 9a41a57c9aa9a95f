//! AWS Bedrock adapters
//!
//! Model invocation goes through the Bedrock Converse API; knowledge
//! retrieval goes through the Bedrock Agent Runtime `retrieve` operation.

mod invoker;
mod retriever;

pub use invoker::BedrockModelInvoker;
pub use retriever::BedrockKnowledgeRetriever;
