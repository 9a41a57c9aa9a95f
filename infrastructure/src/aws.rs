//! Shared AWS SDK configuration bootstrap
//!
//! All three adapters (DynamoDB, Bedrock Runtime, Bedrock Agent Runtime)
//! share one credential/region resolution so the process loads the
//! credential chain once.

use crate::config::FileAwsConfig;
use aws_config::SdkConfig;
use tracing::info;

/// Resolve the AWS SDK configuration from region/profile settings.
pub async fn load_sdk_config(config: &FileAwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(ref profile) = config.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;
    info!(region = %config.region, "AWS SDK configuration loaded");
    sdk_config
}
