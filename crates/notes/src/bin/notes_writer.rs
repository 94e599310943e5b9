//! Notes writer Lambda (`POST /notes`).

use lambda_http::{run, service_fn, Error, Request};

use notes::client::create_dynamodb_client;
use notes::config::Config;
use notes::handlers::write_note;
use notes::storage::DynamoDbRepository;
use notes::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    tracing::info!(
        table = %config.writer_table_name,
        target = %config.aws.target_display(),
        "Starting notes writer"
    );

    let client = create_dynamodb_client(&config.aws).await;
    let repo = DynamoDbRepository::new(client, config.writer_table_name);
    let repo = &repo;

    run(service_fn(move |request: Request| async move {
        write_note(repo, request).await
    }))
    .await
}
