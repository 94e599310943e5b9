//! AWS SDK client setup (Imperative Shell).
//!
//! Clients are built once per process, before the Lambda runtime starts, and
//! then passed explicitly into the handlers.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;

use crate::config::{AwsConfig, LOCAL_REGION};

/// Loads the shared SDK configuration.
///
/// With an endpoint override the SDK is pointed at a local service using
/// static `test`/`test` credentials.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        tracing::info!(endpoint = %endpoint, "overriding default DynamoDB endpoint");

        let region = config
            .region
            .clone()
            .unwrap_or_else(|| LOCAL_REGION.to_string());

        loader = loader
            .endpoint_url(endpoint)
            .region(Region::new(region))
            .credentials_provider(Credentials::new("test", "test", None, None, "local"));
    }

    loader.load().await
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_dynamodb_client(config: &AwsConfig) -> aws_sdk_dynamodb::Client {
    let sdk_config = load_sdk_config(config).await;
    aws_sdk_dynamodb::Client::new(&sdk_config)
}

/// Creates a CodeDeploy client from the default provider chain.
pub async fn create_codedeploy_client() -> aws_sdk_codedeploy::Client {
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    aws_sdk_codedeploy::Client::new(&sdk_config)
}
