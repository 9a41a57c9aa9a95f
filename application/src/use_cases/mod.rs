//! Use cases (orchestrators) of the enrichment pipeline

pub mod classify_inquiry;
pub mod generate_answer;
pub mod ingest_inquiry;
pub mod shared;
