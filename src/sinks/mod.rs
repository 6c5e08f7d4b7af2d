//! AWS-backed [`Sink`](crate::core::Sink) implementations.
//!
//! Each sink builds its SDK client from the invocation's shared
//! [`SdkConfig`](aws_config::SdkConfig) and performs exactly one call.

pub mod eventbridge;
pub mod sns;
pub mod sqs;

pub use eventbridge::EventBridgeSink;
pub use sns::SnsSink;
pub use sqs::SqsSink;
