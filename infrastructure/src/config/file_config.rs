//! Configuration file schema (`concierge.toml`)

use serde::{Deserialize, Serialize};

/// Top-level configuration
///
/// The `[knowledge_base]` section is genuinely optional: when absent,
/// retrieval augmentation is disabled and answer prompts fall back to
/// general domain knowledge. This is a feature flag, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub table: FileTableConfig,
    pub aws: FileAwsConfig,
    pub model: FileModelConfig,
    pub knowledge_base: Option<FileKnowledgeBaseConfig>,
}

impl FileConfig {
    /// Whether a knowledge base is configured (retrieval enabled).
    pub fn retrieval_enabled(&self) -> bool {
        self.knowledge_base.is_some()
    }
}

/// Inquiry table settings (`[table]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTableConfig {
    /// DynamoDB table holding the inquiry records
    pub name: String,
}

impl Default for FileTableConfig {
    fn default() -> Self {
        Self {
            name: "InquiryTable".to_string(),
        }
    }
}

/// AWS connection settings (`[aws]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAwsConfig {
    /// AWS region for all service clients (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials (default: credential chain)
    pub profile: Option<String>,
}

impl Default for FileAwsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
        }
    }
}

/// Generative model settings (`[model]` section)
///
/// Model identity is fixed configuration; the pipeline never computes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Bedrock model id used for both generation and classification
    pub id: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            id: "anthropic.claude-3-sonnet-20240229-v1:0".to_string(),
        }
    }
}

/// Knowledge base settings (`[knowledge_base]` section, optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileKnowledgeBaseConfig {
    /// Bedrock knowledge base identifier
    pub id: String,
}
