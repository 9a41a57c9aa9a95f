//! Prompt templates for the enrichment pipeline

pub mod template;
