use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use rng_publisher::utils::{logger, validation::Validate};
use rng_publisher::{AwsConnectionResolver, PublishHandler, PublishRequest, SinkConfig};

async fn function_handler(
    handler: &PublishHandler<AwsConnectionResolver>,
    event: LambdaEvent<PublishRequest>,
) -> Result<u8, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling invocation");

    let value = handler.invoke(event.payload).await?;
    Ok(value.get())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = SinkConfig::from_env();
    config.validate()?;
    tracing::info!(
        queue_url = %config.queue_url,
        topic_arn = %config.topic_arn,
        event_bus = %config.event_bus_name,
        "Sink configuration loaded"
    );

    let handler = PublishHandler::aws(&config);
    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<PublishRequest>| async move {
        function_handler(handler, event).await
    }))
    .await
}
