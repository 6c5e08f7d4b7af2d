pub mod config;
pub mod core;
pub mod domain;
pub mod sinks;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{aws::AwsConnectionResolver, SinkConfig};
pub use crate::core::{handler::PublishHandler, PublishRequest, RandomNumber};
pub use crate::utils::error::{PublisherError, Result};
