//! AWS SDK client setup (Imperative Shell).

use super::config::Throughput;
use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::Client;
use notes::config::{AwsConfig, LOCAL_REGION};

/// Reads the target environment for developer commands.
///
/// - `AWS_ENDPOINT_URL` - Use local DynamoDB (e.g., http://localhost:8000)
/// - `AWS_REGION` - AWS region (defaults to us-east-1)
pub fn aws_config_from_env() -> AwsConfig {
    let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
    let region = var("AWS_REGION").unwrap_or_else(|| LOCAL_REGION.to_string());

    AwsConfig {
        endpoint_url: var("AWS_ENDPOINT_URL"),
        region: Some(region),
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    notes::client::create_dynamodb_client(config).await
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception()) =>
        {
            return Ok(None);
        }
        Err(err) => return Err(DynamodbError::AwsSdk(err.to_string())),
    };

    let table = response.table().ok_or_else(|| {
        DynamodbError::AwsSdk(format!("DescribeTable returned no table for {}", table_name))
    })?;

    let status = match table.table_status() {
        Some(aws_sdk_dynamodb::types::TableStatus::Active) => TableStatus::Active,
        Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
        Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
        Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    // On-demand tables report zero provisioned units.
    let throughput = table
        .provisioned_throughput()
        .and_then(|t| Some((t.read_capacity_units()?, t.write_capacity_units()?)))
        .filter(|(read, write)| *read > 0 && *write > 0)
        .map(|(read, write)| Throughput {
            read_capacity_units: read,
            write_capacity_units: write,
        });

    Ok(Some(TableState { status, throughput }))
}
