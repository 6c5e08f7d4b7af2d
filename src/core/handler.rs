use crate::config::aws::AwsConnectionResolver;
use crate::config::SinkConfig;
use crate::core::random::ThreadRngSource;
use crate::core::{
    ConnectionResolver, DeliveryOutcome, InvocationReport, PublishRequest, RandomNumber,
    RandomSource, Sink,
};
use crate::sinks::{EventBridgeSink, SnsSink, SqsSink};
use crate::utils::error::Result;

/// Draws a random number and fans it out to the sinks a request selects.
///
/// Only connection resolution can fail an invocation. Sink failures are
/// logged and recorded in the [`InvocationReport`], and the drawn number is
/// returned regardless.
pub struct PublishHandler<R: ConnectionResolver> {
    resolver: R,
    sinks: Vec<Box<dyn Sink<R::Connection>>>,
    random: Box<dyn RandomSource>,
}

impl<R: ConnectionResolver> PublishHandler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            sinks: Vec::new(),
            random: Box::new(ThreadRngSource),
        }
    }

    /// Sinks are attempted in the order they are added.
    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: Sink<R::Connection> + 'static,
    {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn with_random_source<G>(mut self, random: G) -> Self
    where
        G: RandomSource + 'static,
    {
        self.random = Box::new(random);
        self
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub async fn invoke(&self, request: PublishRequest) -> Result<RandomNumber> {
        self.invoke_with_report(request)
            .await
            .map(|report| report.value)
    }

    pub async fn invoke_with_report(&self, request: PublishRequest) -> Result<InvocationReport> {
        let value = self.random.draw();
        tracing::info!("Generated random number: {}", value);

        let connection = self.resolver.resolve().await.map_err(|e| {
            tracing::error!("Failed to resolve connection configuration: {}", e);
            e
        })?;

        let mut deliveries = Vec::new();
        for sink in &self.sinks {
            let kind = sink.kind();
            if !request.targets(kind) {
                tracing::debug!("Skipping {}: not requested", kind);
                continue;
            }

            let error = match sink.deliver(&connection, value).await {
                Ok(()) => None,
                Err(e) => {
                    tracing::error!(sink = %kind, "Failed to publish random number: {}", e);
                    Some(e.to_string())
                }
            };
            deliveries.push(DeliveryOutcome { sink: kind, error });
        }

        let report = InvocationReport { value, deliveries };
        tracing::info!(
            attempted = report.deliveries.len(),
            failed = report.failures(),
            "Invocation finished"
        );
        Ok(report)
    }
}

impl PublishHandler<AwsConnectionResolver> {
    /// Production wiring: SQS, then SNS, then EventBridge.
    pub fn aws(config: &SinkConfig) -> Self {
        Self::new(AwsConnectionResolver::from_config(config))
            .with_sink(SqsSink::new(config.queue_url.clone()))
            .with_sink(SnsSink::new(config.topic_arn.clone()))
            .with_sink(EventBridgeSink::new(
                config.event_bus_name.clone(),
                config.event_source.clone(),
                config.detail_type.clone(),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedSource;
    use crate::core::SinkKind;
    use crate::utils::error::PublisherError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockConnection;

    #[derive(Clone, Default)]
    struct MockResolver {
        fail: bool,
        resolved: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ConnectionResolver for MockResolver {
        type Connection = MockConnection;

        async fn resolve(&self) -> Result<MockConnection> {
            self.resolved.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PublisherError::ConfigError {
                    message: "no credentials".to_string(),
                });
            }
            Ok(MockConnection)
        }
    }

    #[derive(Clone)]
    struct RecordingSink {
        kind: SinkKind,
        fail: bool,
        calls: Arc<Mutex<Vec<(SinkKind, RandomNumber)>>>,
    }

    #[async_trait]
    impl Sink<MockConnection> for RecordingSink {
        fn kind(&self) -> SinkKind {
            self.kind
        }

        async fn deliver(&self, _connection: &MockConnection, value: RandomNumber) -> Result<()> {
            self.calls.lock().await.push((self.kind, value));
            if self.fail {
                return Err(PublisherError::delivery(self.kind.name(), "backend unavailable"));
            }
            Ok(())
        }
    }

    type Calls = Arc<Mutex<Vec<(SinkKind, RandomNumber)>>>;

    fn handler(
        resolver: MockResolver,
        failing: &[SinkKind],
    ) -> (PublishHandler<MockResolver>, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let mut handler = PublishHandler::new(resolver)
            .with_random_source(FixedSource(RandomNumber::new(7).unwrap()));
        for kind in [SinkKind::Queue, SinkKind::Topic, SinkKind::EventBus] {
            handler = handler.with_sink(RecordingSink {
                kind,
                fail: failing.contains(&kind),
                calls: calls.clone(),
            });
        }
        (handler, calls)
    }

    #[tokio::test]
    async fn test_no_flags_makes_no_calls() {
        let (handler, calls) = handler(MockResolver::default(), &[]);

        let value = handler.invoke(PublishRequest::default()).await.unwrap();

        assert_eq!(value.get(), 7);
        assert!(calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_all_flags_call_sinks_in_order() {
        let (handler, calls) = handler(MockResolver::default(), &[]);

        let report = handler.invoke_with_report(PublishRequest::all()).await.unwrap();

        assert_eq!(
            report.attempted(),
            vec![SinkKind::Queue, SinkKind::Topic, SinkKind::EventBus]
        );
        let calls = calls.lock().await;
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|(_, v)| v.get() == 7));
    }

    #[tokio::test]
    async fn test_only_selected_sinks_are_called() {
        let (handler, calls) = handler(MockResolver::default(), &[]);
        let request = PublishRequest {
            publish_to_sqs: false,
            publish_to_sns: true,
            publish_to_eb: false,
        };

        handler.invoke(request).await.unwrap();

        let kinds: Vec<SinkKind> = calls.lock().await.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![SinkKind::Topic]);
    }

    #[tokio::test]
    async fn test_resolution_failure_is_fatal_and_skips_sinks() {
        let resolver = MockResolver {
            fail: true,
            ..Default::default()
        };
        let (handler, calls) = handler(resolver.clone(), &[]);

        let err = handler.invoke(PublishRequest::all()).await.unwrap_err();

        assert!(matches!(err, PublisherError::ConfigError { .. }));
        assert!(err.is_fatal());
        assert_eq!(resolver.resolved.load(Ordering::SeqCst), 1);
        assert!(calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_single_sink_failure_does_not_fail_invocation() {
        let (handler, calls) = handler(MockResolver::default(), &[SinkKind::Topic]);

        let report = handler.invoke_with_report(PublishRequest::all()).await.unwrap();

        assert_eq!(report.value.get(), 7);
        assert_eq!(report.failures(), 1);
        assert!(!report.deliveries[1].succeeded());
        // the event bus still gets its turn after the topic fails
        assert_eq!(calls.lock().await.len(), 3);
    }

    #[tokio::test]
    async fn test_all_sinks_failing_still_returns_value() {
        let all = [SinkKind::Queue, SinkKind::Topic, SinkKind::EventBus];
        let (handler, _calls) = handler(MockResolver::default(), &all);

        let value = handler.invoke(PublishRequest::all()).await.unwrap();

        assert_eq!(value.get(), 7);
    }

    #[tokio::test]
    async fn test_resolves_once_per_invocation() {
        let resolver = MockResolver::default();
        let (handler, _calls) = handler(resolver.clone(), &[]);

        handler.invoke(PublishRequest::all()).await.unwrap();
        handler.invoke(PublishRequest::default()).await.unwrap();

        assert_eq!(resolver.resolved.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_aws_wiring_has_three_sinks() {
        let handler = PublishHandler::aws(&SinkConfig::default());
        assert_eq!(handler.sink_count(), 3);
    }
}
