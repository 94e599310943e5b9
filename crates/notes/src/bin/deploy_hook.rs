//! CodeDeploy lifecycle hook Lambda.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use notes::client::create_codedeploy_client;
use notes::handlers::handle_deployment_hook;
use notes::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let client = create_codedeploy_client().await;
    let client = &client;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_deployment_hook(client, event.payload, &event.context.request_id)
            .await
            .map_err(Error::from)
    }))
    .await
}
