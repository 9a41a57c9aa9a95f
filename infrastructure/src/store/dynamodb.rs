//! DynamoDB inquiry store adapter
//!
//! Implements the `InquiryStore` port against a single DynamoDB table keyed
//! by `id`. Partial updates use an `UpdateExpression` so all fields of one
//! patch are applied in a single atomic call.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use concierge_application::{InquiryStore, StoreError};
use concierge_domain::{Category, InquiryPatch, InquiryRecord};
use std::collections::HashMap;
use tracing::debug;

pub struct DynamoInquiryStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoInquiryStore {
    pub fn new(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: DynamoClient::new(sdk_config),
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl InquiryStore for DynamoInquiryStore {
    async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                StoreError::RequestFailed(format!(
                    "DynamoDB get_item failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        match response.item() {
            Some(item) => {
                debug!(table = %self.table_name, id, "Fetched inquiry item");
                item_to_record(item).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, record: &InquiryRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                StoreError::RequestFailed(format!(
                    "DynamoDB put_item failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(table = %self.table_name, id = %record.id, "Stored inquiry item");
        Ok(())
    }

    async fn update_fields(&self, id: &str, patch: &InquiryPatch) -> Result<(), StoreError> {
        let (expression, values) = patch_to_update_expression(patch);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression(expression)
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .map_err(|e| {
                StoreError::RequestFailed(format!(
                    "DynamoDB update_item failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(table = %self.table_name, id, "Applied partial update");
        Ok(())
    }
}

// ─── Attribute mapping ───────────────────────────────────────────

fn record_to_item(record: &InquiryRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(record.id.clone()));
    item.insert(
        "mailAddress".to_string(),
        AttributeValue::S(record.mail_address.clone()),
    );
    item.insert(
        "userName".to_string(),
        AttributeValue::S(record.user_name.clone()),
    );
    item.insert(
        "reviewText".to_string(),
        AttributeValue::S(record.review_text.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(record.created_at.clone()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(record.updated_at.clone()),
    );
    if let Some(ref answer) = record.answer {
        item.insert("answer".to_string(), AttributeValue::S(answer.clone()));
    }
    if let Some(category) = record.category {
        item.insert(
            "category".to_string(),
            AttributeValue::S(category.as_str().to_string()),
        );
    }
    item
}

fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<InquiryRecord, StoreError> {
    let category = match optional_string_attr(item, "category") {
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(StoreError::MalformedRecord)?,
        ),
        None => None,
    };

    Ok(InquiryRecord {
        id: required_string_attr(item, "id")?,
        mail_address: optional_string_attr(item, "mailAddress").unwrap_or_default(),
        user_name: optional_string_attr(item, "userName").unwrap_or_default(),
        review_text: optional_string_attr(item, "reviewText").unwrap_or_default(),
        answer: optional_string_attr(item, "answer"),
        category,
        created_at: optional_string_attr(item, "createdAt").unwrap_or_default(),
        updated_at: optional_string_attr(item, "updatedAt").unwrap_or_default(),
    })
}

fn required_string_attr(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, StoreError> {
    optional_string_attr(item, name)
        .ok_or_else(|| StoreError::MalformedRecord(format!("missing string attribute {}", name)))
}

fn optional_string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
}

/// Build the `SET` expression and value map for a patch.
///
/// `updatedAt` is always written; `answer` and `category` only when the
/// patch carries them, so each enrichment stage touches its own field.
fn patch_to_update_expression(patch: &InquiryPatch) -> (String, HashMap<String, AttributeValue>) {
    let mut assignments = Vec::new();
    let mut values = HashMap::new();

    if let Some(ref answer) = patch.answer {
        assignments.push("answer = :answer");
        values.insert(":answer".to_string(), AttributeValue::S(answer.clone()));
    }
    if let Some(category) = patch.category {
        assignments.push("category = :category");
        values.insert(
            ":category".to_string(),
            AttributeValue::S(category.as_str().to_string()),
        );
    }
    assignments.push("updatedAt = :updatedAt");
    values.insert(
        ":updatedAt".to_string(),
        AttributeValue::S(patch.updated_at.clone()),
    );

    (format!("SET {}", assignments.join(", ")), values)
}
