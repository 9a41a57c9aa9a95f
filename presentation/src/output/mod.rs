//! Console output formatting

pub mod formatter;
