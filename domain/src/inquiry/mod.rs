//! Inquiry aggregate: the persisted record, partial updates, and the
//! closed category taxonomy.

pub mod category;
pub mod entities;
