//! Configuration loading (TOML files + environment overrides)

mod file_config;
mod loader;

pub use file_config::{
    FileAwsConfig, FileConfig, FileKnowledgeBaseConfig, FileModelConfig, FileTableConfig,
};
pub use loader::ConfigLoader;
