use crate::core::{RandomNumber, Sink, SinkKind};
use crate::utils::error::{PublisherError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client as SnsClient;

#[derive(Debug, Clone)]
pub struct SnsSink {
    topic_arn: String,
}

impl SnsSink {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
        }
    }

    pub async fn publish(&self, client: &SnsClient, value: RandomNumber) -> Result<()> {
        let output = client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(value.to_string())
            .send()
            .await
            .map_err(|e| PublisherError::delivery(self.kind().name(), DisplayErrorContext(&e)))?;

        tracing::info!(
            message_id = output.message_id().unwrap_or_default(),
            "Message published to SNS"
        );
        Ok(())
    }
}

#[async_trait]
impl Sink<SdkConfig> for SnsSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Topic
    }

    async fn deliver(&self, connection: &SdkConfig, value: RandomNumber) -> Result<()> {
        self.publish(&SnsClient::new(connection), value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::operation::publish::{PublishError, PublishOutput};
    use aws_sdk_sns::types::error::NotFoundException;
    use aws_smithy_mocks::{mock, mock_client};

    const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:000000000000:test-topic";

    #[tokio::test]
    async fn test_publish_uses_topic_arn_and_decimal_message() {
        let rule = mock!(SnsClient::publish)
            .match_requests(|req| {
                req.topic_arn() == Some(TOPIC_ARN) && req.message() == Some("10")
            })
            .then_output(|| PublishOutput::builder().message_id("msg-1").build());
        let client = mock_client!(aws_sdk_sns, [&rule]);

        SnsSink::new(TOPIC_ARN)
            .publish(&client, RandomNumber::new(10).unwrap())
            .await
            .unwrap();

        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_topic_becomes_delivery_error() {
        let rule = mock!(SnsClient::publish).then_error(|| {
            PublishError::NotFoundException(
                NotFoundException::builder()
                    .message("Topic does not exist")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_sns, [&rule]);

        let err = SnsSink::new(TOPIC_ARN)
            .publish(&client, RandomNumber::new(1).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, PublisherError::DeliveryError { ref sink, .. } if sink == "sns"));
        assert!(!err.is_fatal());
    }
}
