//! Notes reader Lambda (`GET /notes`, `GET /notes/{owner}`).

use lambda_http::{run, service_fn, Error, Request};

use notes::client::create_dynamodb_client;
use notes::config::Config;
use notes::handlers::read_notes;
use notes::storage::DynamoDbRepository;
use notes::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    tracing::info!(
        table = %config.reader_table_name,
        target = %config.aws.target_display(),
        "Starting notes reader"
    );

    let client = create_dynamodb_client(&config.aws).await;
    let repo = DynamoDbRepository::new(client, config.reader_table_name);
    let repo = &repo;

    run(service_fn(move |request: Request| async move {
        read_notes(repo, request).await
    }))
    .await
}
