//! Port definitions (interfaces for external collaborators)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod inquiry_store;
pub mod knowledge_retriever;
pub mod model_invoker;
