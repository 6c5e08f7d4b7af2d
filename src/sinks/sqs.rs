use crate::core::{RandomNumber, Sink, SinkKind};
use crate::utils::error::{PublisherError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client as SqsClient;

#[derive(Debug, Clone)]
pub struct SqsSink {
    queue_url: String,
}

impl SqsSink {
    pub fn new(queue_url: impl Into<String>) -> Self {
        Self {
            queue_url: queue_url.into(),
        }
    }

    /// Sends the decimal text of `value` as the message body.
    pub async fn send(&self, client: &SqsClient, value: RandomNumber) -> Result<()> {
        let output = client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(value.to_string())
            .send()
            .await
            .map_err(|e| PublisherError::delivery(self.kind().name(), DisplayErrorContext(&e)))?;

        tracing::info!(
            message_id = output.message_id().unwrap_or_default(),
            "Message sent to SQS"
        );
        Ok(())
    }
}

#[async_trait]
impl Sink<SdkConfig> for SqsSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Queue
    }

    async fn deliver(&self, connection: &SdkConfig, value: RandomNumber) -> Result<()> {
        self.send(&SqsClient::new(connection), value).await
    }
}
