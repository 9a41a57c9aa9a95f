//! Persistence adapters

mod dynamodb;

pub use dynamodb::DynamoInquiryStore;
