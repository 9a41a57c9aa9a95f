//! Bedrock model invoker adapter
//!
//! Implements the `ModelInvoker` port with single-turn, stateless Converse
//! API calls. The model id is fixed at construction; the per-call token
//! budget comes from the caller. No retry happens here — retry policy, if
//! any, belongs to the surrounding service configuration.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use concierge_application::{InvokerError, ModelInvoker, ModelOutput};
use tracing::debug;

pub struct BedrockModelInvoker {
    client: BedrockClient,
    model_id: String,
}

impl BedrockModelInvoker {
    pub fn new(sdk_config: &SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: BedrockClient::new(sdk_config),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockModelInvoker {
    async fn invoke(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<ModelOutput, InvokerError> {
        let message = bedrock::Message::builder()
            .role(bedrock::ConversationRole::User)
            .content(bedrock::ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| InvokerError::RequestFailed(format!("Failed to build message: {}", e)))?;

        debug!(
            model = %self.model_id,
            max_tokens = max_output_tokens,
            "Calling Bedrock Converse API"
        );

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(max_output_tokens as i32)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| convert_converse_error(&e))?;

        extract_first_text(response.output())
    }
}

/// Pull the generated text out of the first content element of the
/// response message. Anything else (no output, no message, a non-text
/// first block) is unusable content.
fn extract_first_text(output: Option<&bedrock::ConverseOutput>) -> Result<ModelOutput, InvokerError> {
    let message = output
        .and_then(|o| o.as_message().ok())
        .ok_or(InvokerError::EmptyOutput)?;

    match message.content().first() {
        Some(block) => match block.as_text() {
            Ok(text) => Ok(ModelOutput::new(text.clone())),
            Err(_) => Err(InvokerError::EmptyOutput),
        },
        None => Err(InvokerError::EmptyOutput),
    }
}

fn convert_converse_error(err: &SdkError<ConverseError>) -> InvokerError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                InvokerError::RequestFailed(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelTimeoutException(e) => {
                InvokerError::RequestFailed(format!("Bedrock model timed out: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                InvokerError::RequestFailed(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ValidationException(e) => {
                InvokerError::RequestFailed(format!("Bedrock validation error: {}", e))
            }
            other => InvokerError::RequestFailed(format!("Bedrock error: {:?}", other)),
        },
        other => InvokerError::RequestFailed(format!(
            "Bedrock SDK error: {}",
            DisplayErrorContext(other)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_output(text: &str) -> bedrock::ConverseOutput {
        bedrock::ConverseOutput::Message(
            bedrock::Message::builder()
                .role(bedrock::ConversationRole::Assistant)
                .content(bedrock::ContentBlock::Text(text.to_string()))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_extracts_first_text_block() {
        let output = text_output("生成された回答です");
        let result = extract_first_text(Some(&output)).unwrap();
        assert_eq!(result.text, "生成された回答です");
    }

    #[test]
    fn test_missing_output_is_empty() {
        assert!(matches!(
            extract_first_text(None),
            Err(InvokerError::EmptyOutput)
        ));
    }

    #[test]
    fn test_message_without_content_is_empty() {
        let output = bedrock::ConverseOutput::Message(
            bedrock::Message::builder()
                .role(bedrock::ConversationRole::Assistant)
                .set_content(Some(vec![]))
                .build()
                .unwrap(),
        );
        assert!(matches!(
            extract_first_text(Some(&output)),
            Err(InvokerError::EmptyOutput)
        ));
    }
}
