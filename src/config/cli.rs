use crate::config::SinkConfig;
use crate::core::PublishRequest;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rng-publisher")]
#[command(about = "Generate a random number and publish it to SQS, SNS and EventBridge")]
pub struct CliConfig {
    #[arg(long, help = "Send the number to the SQS queue")]
    pub sqs: bool,

    #[arg(long, help = "Publish the number to the SNS topic")]
    pub sns: bool,

    #[arg(long, help = "Emit the number on the EventBridge bus")]
    pub eb: bool,

    #[arg(long, env = "SQS_QUEUE_URL", default_value = super::DEFAULT_QUEUE_URL)]
    pub queue_url: String,

    #[arg(long, env = "SNS_TOPIC_ARN", default_value = super::DEFAULT_TOPIC_ARN)]
    pub topic_arn: String,

    #[arg(long, env = "EVENT_BUS_NAME", default_value = super::DEFAULT_EVENT_BUS_NAME)]
    pub event_bus_name: String,

    #[arg(long, env = "EVENT_SOURCE", default_value = super::DEFAULT_EVENT_SOURCE)]
    pub event_source: String,

    #[arg(long, env = "EVENT_DETAIL_TYPE", default_value = super::DEFAULT_DETAIL_TYPE)]
    pub detail_type: String,

    #[arg(long, env = "AWS_REGION_OVERRIDE")]
    pub region: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn request(&self) -> PublishRequest {
        PublishRequest {
            publish_to_sqs: self.sqs,
            publish_to_sns: self.sns,
            publish_to_eb: self.eb,
        }
    }

    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            queue_url: self.queue_url.clone(),
            topic_arn: self.topic_arn.clone(),
            event_bus_name: self.event_bus_name.clone(),
            event_source: self.event_source.clone(),
            detail_type: self.detail_type.clone(),
            region: self.region.clone(),
        }
    }
}
