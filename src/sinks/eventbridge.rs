use crate::core::{RandomNumber, RandomNumberDetail, Sink, SinkKind};
use crate::utils::error::{PublisherError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_eventbridge::error::DisplayErrorContext;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client as EventBridgeClient;

#[derive(Debug, Clone)]
pub struct EventBridgeSink {
    bus_name: String,
    source: String,
    detail_type: String,
}

impl EventBridgeSink {
    pub fn new(
        bus_name: impl Into<String>,
        source: impl Into<String>,
        detail_type: impl Into<String>,
    ) -> Self {
        Self {
            bus_name: bus_name.into(),
            source: source.into(),
            detail_type: detail_type.into(),
        }
    }

    /// `{"RandomNumber": <value>}`
    pub fn detail(value: RandomNumber) -> Result<String> {
        Ok(serde_json::to_string(&RandomNumberDetail::from(value))?)
    }

    pub fn entry(&self, value: RandomNumber) -> Result<PutEventsRequestEntry> {
        Ok(PutEventsRequestEntry::builder()
            .source(&self.source)
            .detail_type(&self.detail_type)
            .detail(Self::detail(value)?)
            .event_bus_name(&self.bus_name)
            .build())
    }

    pub async fn put_event(&self, client: &EventBridgeClient, value: RandomNumber) -> Result<()> {
        let output = client
            .put_events()
            .entries(self.entry(value)?)
            .send()
            .await
            .map_err(|e| PublisherError::delivery(self.kind().name(), DisplayErrorContext(&e)))?;

        // PutEvents reports rejected entries in a successful response.
        if output.failed_entry_count() > 0 {
            let reason = output
                .entries()
                .iter()
                .find(|entry| entry.error_code().is_some())
                .map(|entry| {
                    format!(
                        "{}: {}",
                        entry.error_code().unwrap_or_default(),
                        entry.error_message().unwrap_or_default()
                    )
                })
                .unwrap_or_else(|| "event was rejected".to_string());
            return Err(PublisherError::delivery(self.kind().name(), reason));
        }

        tracing::info!("Event published to EventBridge");
        Ok(())
    }
}

#[async_trait]
impl Sink<SdkConfig> for EventBridgeSink {
    fn kind(&self) -> SinkKind {
        SinkKind::EventBus
    }

    async fn deliver(&self, connection: &SdkConfig, value: RandomNumber) -> Result<()> {
        self.put_event(&EventBridgeClient::new(connection), value).await
    }
}
