pub mod aws;
#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_sns_topic_arn, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_QUEUE_URL: &str =
    "https://sqs.us-east-1.amazonaws.com/425362996713/nhulston-go-queue";
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:425362996713:nhulston-go-topic";
pub const DEFAULT_EVENT_BUS_NAME: &str = "nhulston-go-bus";
pub const DEFAULT_EVENT_SOURCE: &str = "com.nhulston.rnggo";
pub const DEFAULT_DETAIL_TYPE: &str = "RandomNumber";

/// Downstream endpoints handed to the handler at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    pub queue_url: String,
    pub topic_arn: String,
    pub event_bus_name: String,
    pub event_source: String,
    pub detail_type: String,
    /// Overrides the region the AWS default chain would pick.
    pub region: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            topic_arn: DEFAULT_TOPIC_ARN.to_string(),
            event_bus_name: DEFAULT_EVENT_BUS_NAME.to_string(),
            event_source: DEFAULT_EVENT_SOURCE.to_string(),
            detail_type: DEFAULT_DETAIL_TYPE.to_string(),
            region: None,
        }
    }
}

impl SinkConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            queue_url: lookup("SQS_QUEUE_URL").unwrap_or(defaults.queue_url),
            topic_arn: lookup("SNS_TOPIC_ARN").unwrap_or(defaults.topic_arn),
            event_bus_name: lookup("EVENT_BUS_NAME").unwrap_or(defaults.event_bus_name),
            event_source: lookup("EVENT_SOURCE").unwrap_or(defaults.event_source),
            detail_type: lookup("EVENT_DETAIL_TYPE").unwrap_or(defaults.detail_type),
            region: lookup("AWS_REGION_OVERRIDE")
                .filter(|r| !r.is_empty())
                .or(defaults.region),
        }
    }
}

impl Validate for SinkConfig {
    fn validate(&self) -> Result<()> {
        validate_url("queue_url", &self.queue_url)?;
        validate_sns_topic_arn("topic_arn", &self.topic_arn)?;
        validate_non_empty_string("event_bus_name", &self.event_bus_name)?;
        validate_non_empty_string("event_source", &self.event_source)?;
        validate_non_empty_string("detail_type", &self.detail_type)?;
        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        tracing::debug!("Sink configuration validation passed");
        Ok(())
    }
}
