//! Generate Answer use case.
//!
//! The answer enrichment orchestrator: loads an inquiry, optionally
//! retrieves knowledge-base passages, composes the answer prompt, invokes
//! the model with the answer token budget, and persists the reply.
//!
//! Retrieval is a capability, not a code path the composer knows about:
//! when the use case is built without a retriever the prompt simply omits
//! the knowledge section. A configured retriever that fails surfaces
//! [`EnrichError::Retrieval`] — never a silent fallback to the no-context
//! prompt.

use crate::ports::inquiry_store::InquiryStore;
use crate::ports::knowledge_retriever::KnowledgeRetriever;
use crate::ports::model_invoker::{InvokerError, ModelInvoker};
use crate::use_cases::shared::{load_enrichable, now_timestamp, EnrichError};
use concierge_domain::{InquiryPatch, PromptTemplate, ANSWER_MAX_TOKENS};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Number of passages requested from the knowledge base per inquiry.
const RETRIEVE_TOP_K: usize = 3;

/// Input for the [`GenerateAnswerUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateAnswerInput {
    /// Id of the inquiry to answer.
    pub id: String,
}

impl GenerateAnswerInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Successful outcome: the persisted reply and its inquiry id.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedAnswer {
    pub id: String,
    pub answer: String,
}

/// Use case for generating and persisting an inquiry reply.
///
/// Each execution is a stateless fetch → (retrieve) → compose → invoke →
/// write pass. Re-running against an unchanged record overwrites `answer`
/// with a freshly computed value and advances `updatedAt`; nothing
/// accumulates.
pub struct GenerateAnswerUseCase {
    store: Arc<dyn InquiryStore>,
    invoker: Arc<dyn ModelInvoker>,
    retriever: Option<Arc<dyn KnowledgeRetriever>>,
}

impl GenerateAnswerUseCase {
    /// Create without retrieval augmentation (no knowledge base configured).
    pub fn new(store: Arc<dyn InquiryStore>, invoker: Arc<dyn ModelInvoker>) -> Self {
        Self {
            store,
            invoker,
            retriever: None,
        }
    }

    /// Enable retrieval augmentation with the given retriever.
    pub fn with_retriever(mut self, retriever: Arc<dyn KnowledgeRetriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    /// Execute the answer enrichment pass for one inquiry.
    pub async fn execute(
        &self,
        input: GenerateAnswerInput,
    ) -> Result<GeneratedAnswer, EnrichError> {
        let record = load_enrichable(self.store.as_ref(), &input.id).await?;

        let passages = match &self.retriever {
            Some(retriever) => {
                let passages = retriever
                    .retrieve(&record.review_text, RETRIEVE_TOP_K)
                    .await?;
                debug!(
                    id = %record.id,
                    passages = passages.len(),
                    "Retrieved knowledge-base context"
                );
                passages.into_iter().map(|p| p.text).collect()
            }
            None => Vec::new(),
        };

        let prompt = PromptTemplate::answer_prompt(&record.review_text, &passages);
        let output = self.invoker.invoke(&prompt, ANSWER_MAX_TOKENS).await?;

        let answer = output.text.trim().to_string();
        if answer.is_empty() {
            return Err(InvokerError::EmptyOutput.into());
        }

        let patch = InquiryPatch::answer(answer.clone(), now_timestamp());
        self.store.update_fields(&record.id, &patch).await?;

        info!(id = %record.id, "Answer generated and saved");
        Ok(GeneratedAnswer {
            id: record.id,
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inquiry_store::StoreError;
    use crate::ports::knowledge_retriever::{Passage, RetrieverError};
    use crate::ports::model_invoker::ModelOutput;
    use async_trait::async_trait;
    use concierge_domain::InquiryRecord;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockStore {
        records: Mutex<HashMap<String, InquiryRecord>>,
        patches: Mutex<Vec<(String, InquiryPatch)>>,
        fail_update: bool,
    }

    impl MockStore {
        fn with_record(record: InquiryRecord) -> Self {
            let mut records = HashMap::new();
            records.insert(record.id.clone(), record);
            Self {
                records: Mutex::new(records),
                patches: Mutex::new(Vec::new()),
                fail_update: false,
            }
        }

        fn empty() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                patches: Mutex::new(Vec::new()),
                fail_update: false,
            }
        }

        fn failing_update(mut self) -> Self {
            self.fail_update = true;
            self
        }

        fn patch_count(&self) -> usize {
            self.patches.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl InquiryStore for MockStore {
        async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError> {
            Ok(self.records.lock().unwrap().get(id).cloned())
        }

        async fn put(&self, record: &InquiryRecord) -> Result<(), StoreError> {
            self.records
                .lock()
                .unwrap()
                .insert(record.id.clone(), record.clone());
            Ok(())
        }

        async fn update_fields(&self, id: &str, patch: &InquiryPatch) -> Result<(), StoreError> {
            if self.fail_update {
                return Err(StoreError::RequestFailed("write rejected".to_string()));
            }
            let mut records = self.records.lock().unwrap();
            let record = records
                .get_mut(id)
                .ok_or_else(|| StoreError::RequestFailed("no such record".to_string()))?;
            patch.apply(record);
            self.patches
                .lock()
                .unwrap()
                .push((id.to_string(), patch.clone()));
            Ok(())
        }
    }

    struct MockInvoker {
        response: Result<String, String>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        last_max_tokens: AtomicUsize,
    }

    impl MockInvoker {
        fn replying(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                last_max_tokens: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                last_max_tokens: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelInvoker for MockInvoker {
        async fn invoke(
            &self,
            prompt: &str,
            max_output_tokens: u32,
        ) -> Result<ModelOutput, InvokerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.last_max_tokens
                .store(max_output_tokens as usize, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(ModelOutput::new(text.clone())),
                Err(message) => Err(InvokerError::RequestFailed(message.clone())),
            }
        }
    }

    struct MockRetriever {
        result: Result<Vec<Passage>, String>,
    }

    #[async_trait]
    impl KnowledgeRetriever for MockRetriever {
        async fn retrieve(
            &self,
            _query: &str,
            _top_k: usize,
        ) -> Result<Vec<Passage>, RetrieverError> {
            match &self.result {
                Ok(passages) => Ok(passages.clone()),
                Err(message) => Err(RetrieverError::RequestFailed(message.clone())),
            }
        }
    }

    fn sample_record() -> InquiryRecord {
        InquiryRecord::new(
            "inq-1",
            "guest@example.com",
            "Tanaka",
            "What time is checkout?",
            "2025-09-01T00:00:00+00:00",
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn generates_and_persists_answer_without_retrieval() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::replying("チェックアウトは11時です。"));
        let use_case = GenerateAnswerUseCase::new(store.clone(), invoker.clone());

        let result = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap();

        assert_eq!(result.id, "inq-1");
        assert_eq!(result.answer, "チェックアウトは11時です。");
        assert_eq!(store.patch_count(), 1);

        let stored = store.get("inq-1").await.unwrap().unwrap();
        assert_eq!(stored.answer.as_deref(), Some("チェックアウトは11時です。"));
        assert!(stored.category.is_none());

        // Without a retriever the prompt has no knowledge section
        let prompt = invoker.last_prompt.lock().unwrap().clone().unwrap();
        assert!(!prompt.contains("ホテル情報"));
        assert_eq!(
            invoker.last_max_tokens.load(Ordering::SeqCst),
            ANSWER_MAX_TOKENS as usize
        );
    }

    #[tokio::test]
    async fn retrieved_passages_are_embedded_in_the_prompt() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::replying("Checkout is at 11am."));
        let retriever = Arc::new(MockRetriever {
            result: Ok(vec![
                Passage::new("Checkout is at 11am."),
                Passage::new("Breakfast served 7-9am."),
            ]),
        });
        let use_case =
            GenerateAnswerUseCase::new(store, invoker.clone()).with_retriever(retriever);

        use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap();

        let prompt = invoker.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Checkout is at 11am."));
        assert!(prompt.contains("Breakfast served 7-9am."));
        assert!(prompt.contains("What time is checkout?"));
    }

    #[tokio::test]
    async fn retriever_failure_surfaces_and_skips_the_model() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::replying("unused"));
        let retriever = Arc::new(MockRetriever {
            result: Err("vector index unavailable".to_string()),
        });
        let use_case =
            GenerateAnswerUseCase::new(store.clone(), invoker.clone()).with_retriever(retriever);

        let error = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap_err();

        assert!(matches!(error, EnrichError::Retrieval(_)));
        assert_eq!(invoker.call_count(), 0);
        assert_eq!(store.patch_count(), 0);
    }

    #[tokio::test]
    async fn empty_review_text_is_rejected_before_invocation() {
        let mut record = sample_record();
        record.review_text = "  ".to_string();
        let store = Arc::new(MockStore::with_record(record));
        let invoker = Arc::new(MockInvoker::replying("unused"));
        let use_case = GenerateAnswerUseCase::new(store.clone(), invoker.clone());

        let error = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap_err();

        assert!(matches!(error, EnrichError::InvalidInput(_)));
        assert_eq!(invoker.call_count(), 0);
        assert_eq!(store.patch_count(), 0);
    }

    #[tokio::test]
    async fn missing_record_yields_not_found_without_invocation() {
        let store = Arc::new(MockStore::empty());
        let invoker = Arc::new(MockInvoker::replying("unused"));
        let use_case = GenerateAnswerUseCase::new(store, invoker.clone());

        let error = use_case
            .execute(GenerateAnswerInput::new("missing"))
            .await
            .unwrap_err();

        assert!(matches!(error, EnrichError::NotFound(_)));
        assert_eq!(invoker.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_id_is_invalid_input() {
        let store = Arc::new(MockStore::empty());
        let invoker = Arc::new(MockInvoker::replying("unused"));
        let use_case = GenerateAnswerUseCase::new(store, invoker);

        let error = use_case
            .execute(GenerateAnswerInput::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(error, EnrichError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn model_failure_leaves_the_record_untouched() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::failing("throttled"));
        let use_case = GenerateAnswerUseCase::new(store.clone(), invoker);

        let error = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap_err();

        assert!(matches!(error, EnrichError::ModelInvocation(_)));
        assert_eq!(store.patch_count(), 0);
        let stored = store.get("inq-1").await.unwrap().unwrap();
        assert!(stored.answer.is_none());
    }

    #[tokio::test]
    async fn whitespace_only_model_output_is_an_invocation_error() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::replying("   \n"));
        let use_case = GenerateAnswerUseCase::new(store.clone(), invoker);

        let error = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            EnrichError::ModelInvocation(InvokerError::EmptyOutput)
        ));
        assert_eq!(store.patch_count(), 0);
    }

    #[tokio::test]
    async fn persistence_failure_after_generation_surfaces() {
        let store = Arc::new(MockStore::with_record(sample_record()).failing_update());
        let invoker = Arc::new(MockInvoker::replying("a fine answer"));
        let use_case = GenerateAnswerUseCase::new(store, invoker.clone());

        let error = use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap_err();

        // The model was invoked, but the result is lost with the failed write
        assert!(matches!(error, EnrichError::Persistence(_)));
        assert_eq!(invoker.call_count(), 1);
    }

    #[tokio::test]
    async fn rerunning_overwrites_the_answer_idempotently() {
        let store = Arc::new(MockStore::with_record(sample_record()));
        let invoker = Arc::new(MockInvoker::replying("the reply"));
        let use_case = GenerateAnswerUseCase::new(store.clone(), invoker);

        use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap();
        use_case
            .execute(GenerateAnswerInput::new("inq-1"))
            .await
            .unwrap();

        // Two writes to the same field of the same record, no duplicates
        assert_eq!(store.patch_count(), 2);
        assert_eq!(store.records.lock().unwrap().len(), 1);
        let stored = store.get("inq-1").await.unwrap().unwrap();
        assert_eq!(stored.id, "inq-1");
        assert_eq!(stored.answer.as_deref(), Some("the reply"));
        assert_ne!(stored.updated_at, stored.created_at);
    }
}
