//! CLI entrypoint for Inquiry Concierge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use concierge_application::{
    ClassifyInquiryInput, ClassifyInquiryUseCase, GenerateAnswerInput, GenerateAnswerUseCase,
    IngestInquiryInput, IngestInquiryUseCase, InquiryStore,
};
use concierge_infrastructure::{
    load_sdk_config, BedrockKnowledgeRetriever, BedrockModelInvoker, ConfigLoader,
    DynamoInquiryStore,
};
use concierge_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    info!(table = %config.table.name, "Starting Inquiry Concierge");

    // === Dependency Injection ===
    let sdk_config = load_sdk_config(&config.aws).await;
    let store: Arc<dyn InquiryStore> =
        Arc::new(DynamoInquiryStore::new(&sdk_config, &config.table.name));

    match cli.command {
        Command::Ingest {
            mail_address,
            user_name,
            review_text,
        } => {
            let use_case = IngestInquiryUseCase::new(store);
            let result = use_case
                .execute(IngestInquiryInput::new(mail_address, user_name, review_text))
                .await?;

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_ingested(&result)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_ingested_json(&result))
                }
            }
        }

        Command::Answer { id } => {
            let invoker = Arc::new(BedrockModelInvoker::new(&sdk_config, &config.model.id));
            let mut use_case = GenerateAnswerUseCase::new(store, invoker);

            // Retrieval augmentation only when a knowledge base is configured
            if let Some(ref knowledge_base) = config.knowledge_base {
                let retriever =
                    Arc::new(BedrockKnowledgeRetriever::new(&sdk_config, &knowledge_base.id));
                use_case = use_case.with_retriever(retriever);
            }

            let result = use_case.execute(GenerateAnswerInput::new(id)).await?;

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_answer(&result)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_answer_json(&result)),
            }
        }

        Command::Classify { id } => {
            let invoker = Arc::new(BedrockModelInvoker::new(&sdk_config, &config.model.id));
            let use_case = ClassifyInquiryUseCase::new(store, invoker);

            let result = use_case.execute(ClassifyInquiryInput::new(id)).await?;

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_classified(&result)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_classified_json(&result))
                }
            }
        }

        Command::Show { id } => {
            let record = match store.get(&id).await? {
                Some(record) => record,
                None => bail!("Inquiry with id {} not found", id),
            };

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_record(&record)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_record_json(&record)),
            }
        }
    }

    Ok(())
}
