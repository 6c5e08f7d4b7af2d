use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invocation payload. A missing flag reads as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(rename = "publishToSQS", default)]
    pub publish_to_sqs: bool,
    #[serde(rename = "publishToSNS", default)]
    pub publish_to_sns: bool,
    #[serde(rename = "publishToEB", default)]
    pub publish_to_eb: bool,
}

impl PublishRequest {
    pub fn all() -> Self {
        Self {
            publish_to_sqs: true,
            publish_to_sns: true,
            publish_to_eb: true,
        }
    }

    pub fn targets(&self, kind: SinkKind) -> bool {
        match kind {
            SinkKind::Queue => self.publish_to_sqs,
            SinkKind::Topic => self.publish_to_sns,
            SinkKind::EventBus => self.publish_to_eb,
        }
    }
}

/// An integer in `[RandomNumber::MIN, RandomNumber::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RandomNumber(u8);

impl RandomNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self> {
        validate_range("random_number", value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    /// Uniform draw over the closed range.
    pub fn draw<G: Rng + ?Sized>(rng: &mut G) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RandomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// EventBridge `Detail` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomNumberDetail {
    #[serde(rename = "RandomNumber")]
    pub random_number: u8,
}

impl From<RandomNumber> for RandomNumberDetail {
    fn from(value: RandomNumber) -> Self {
        Self {
            random_number: value.get(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Queue,
    Topic,
    EventBus,
}

impl SinkKind {
    pub fn name(&self) -> &'static str {
        match self {
            SinkKind::Queue => "sqs",
            SinkKind::Topic => "sns",
            SinkKind::EventBus => "eventbridge",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub sink: SinkKind,
    /// `None` on success, otherwise the logged failure message.
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationReport {
    pub value: RandomNumber,
    pub deliveries: Vec<DeliveryOutcome>,
}

impl InvocationReport {
    pub fn attempted(&self) -> Vec<SinkKind> {
        self.deliveries.iter().map(|d| d.sink).collect()
    }

    pub fn failures(&self) -> usize {
        self.deliveries.iter().filter(|d| !d.succeeded()).count()
    }
}
