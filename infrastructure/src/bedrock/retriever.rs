//! Bedrock knowledge base retriever adapter
//!
//! Implements the `KnowledgeRetriever` port via the Bedrock Agent Runtime
//! `retrieve` operation with a vector search. Constructed only when a
//! knowledge base id is configured — an unconfigured knowledge base means
//! the application simply has no retriever.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockagentruntime::error::DisplayErrorContext;
use aws_sdk_bedrockagentruntime::types as agent;
use aws_sdk_bedrockagentruntime::Client as AgentClient;
use concierge_application::{KnowledgeRetriever, Passage, RetrieverError};
use tracing::debug;

pub struct BedrockKnowledgeRetriever {
    client: AgentClient,
    knowledge_base_id: String,
}

impl BedrockKnowledgeRetriever {
    pub fn new(sdk_config: &SdkConfig, knowledge_base_id: impl Into<String>) -> Self {
        Self {
            client: AgentClient::new(sdk_config),
            knowledge_base_id: knowledge_base_id.into(),
        }
    }
}

#[async_trait]
impl KnowledgeRetriever for BedrockKnowledgeRetriever {
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<Passage>, RetrieverError> {
        let retrieval_query = agent::KnowledgeBaseQuery::builder()
            .text(query)
            .build();

        let retrieval_configuration = agent::KnowledgeBaseRetrievalConfiguration::builder()
            .vector_search_configuration(
                agent::KnowledgeBaseVectorSearchConfiguration::builder()
                    .number_of_results(top_k as i32)
                    .build(),
            )
            .build();

        debug!(
            knowledge_base = %self.knowledge_base_id,
            top_k,
            "Calling Bedrock Agent Runtime retrieve"
        );

        let response = self
            .client
            .retrieve()
            .knowledge_base_id(&self.knowledge_base_id)
            .retrieval_query(retrieval_query)
            .retrieval_configuration(retrieval_configuration)
            .send()
            .await
            .map_err(|e| {
                RetrieverError::RequestFailed(format!(
                    "Knowledge base retrieve failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let passages: Vec<Passage> = response
            .retrieval_results()
            .iter()
            .filter_map(|result| result.content())
            .map(|content| content.text())
            .map(Passage::new)
            .collect();

        debug!(passages = passages.len(), "Knowledge base returned passages");
        Ok(passages)
    }
}
