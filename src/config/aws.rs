use crate::config::SinkConfig;
use crate::core::ConnectionResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads the ambient AWS configuration (credentials chain, region) once per invocation.
#[derive(Debug, Clone, Default)]
pub struct AwsConnectionResolver {
    region: Option<String>,
}

impl AwsConnectionResolver {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    pub fn from_config(config: &SinkConfig) -> Self {
        Self::new(config.region.clone())
    }
}

#[async_trait]
impl ConnectionResolver for AwsConnectionResolver {
    type Connection = SdkConfig;

    async fn resolve(&self) -> Result<SdkConfig> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let config = loader.load().await;

        // A missing region is not fatal here: each sink call fails and is logged instead.
        match config.region() {
            Some(region) => tracing::debug!("Resolved AWS configuration for region {}", region),
            None => tracing::warn!("No AWS region resolved; sink deliveries will fail"),
        }
        Ok(config)
    }
}
