use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Delivery to {sink} failed: {message}")]
    DeliveryError { sink: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PublisherError {
    pub fn delivery(sink: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::DeliveryError {
            sink: sink.into(),
            message: err.to_string(),
        }
    }

    /// Setup errors abort an invocation; delivery errors are only logged.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DeliveryError { .. })
    }
}

pub type Result<T> = std::result::Result<T, PublisherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_errors_are_not_fatal() {
        let err = PublisherError::delivery("sqs", "access denied");
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Delivery to sqs failed: access denied");
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = PublisherError::ConfigError {
            message: "no region".to_string(),
        };
        assert!(err.is_fatal());
    }
}
