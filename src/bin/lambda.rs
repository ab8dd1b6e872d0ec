// Lambda entry point behind API Gateway. The image cache lives as long as
// the warm execution environment.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

use formbot::Dispatcher;
use formbot::api::handle_gateway_event;
use formbot::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    formbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let dispatcher = Dispatcher::from_config(&config)?;

    run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = dispatcher.clone();
        async move { Ok::<Value, Error>(handle_gateway_event(&dispatcher, &event.payload).await) }
    }))
    .await
}
