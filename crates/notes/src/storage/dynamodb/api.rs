//! Capability traits over the DynamoDB client.
//!
//! Each trait stands in for exactly one client call. The repository only
//! requires the capability an operation needs, and tests implement these
//! traits with in-process fakes.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::{QueryError, QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanError, ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{
    UpdateItemError, UpdateItemInput, UpdateItemOutput,
};
use aws_sdk_dynamodb::Client;

/// Stand-in for `UpdateItem`.
#[async_trait]
pub trait UpdateItemApi: Send + Sync {
    async fn send_update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, SdkError<UpdateItemError, HttpResponse>>;
}

/// Stand-in for `Scan`.
#[async_trait]
pub trait ScanApi: Send + Sync {
    async fn send_scan(
        &self,
        input: ScanInput,
    ) -> Result<ScanOutput, SdkError<ScanError, HttpResponse>>;
}

/// Stand-in for `Query`.
#[async_trait]
pub trait QueryApi: Send + Sync {
    async fn send_query(
        &self,
        input: QueryInput,
    ) -> Result<QueryOutput, SdkError<QueryError, HttpResponse>>;
}

#[async_trait]
impl UpdateItemApi for Client {
    async fn send_update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, SdkError<UpdateItemError, HttpResponse>> {
        self.update_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_update_expression(input.update_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values(input.return_values)
            .send()
            .await
    }
}

#[async_trait]
impl ScanApi for Client {
    async fn send_scan(
        &self,
        input: ScanInput,
    ) -> Result<ScanOutput, SdkError<ScanError, HttpResponse>> {
        self.scan()
            .set_table_name(input.table_name)
            .set_limit(input.limit)
            .send()
            .await
    }
}

#[async_trait]
impl QueryApi for Client {
    async fn send_query(
        &self,
        input: QueryInput,
    ) -> Result<QueryOutput, SdkError<QueryError, HttpResponse>> {
        self.query()
            .set_table_name(input.table_name)
            .set_key_condition_expression(input.key_condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_limit(input.limit)
            .send()
            .await
    }
}
