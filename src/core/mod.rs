pub mod handler;
pub mod random;

pub use crate::domain::model::{
    DeliveryOutcome, InvocationReport, PublishRequest, RandomNumber, RandomNumberDetail, SinkKind,
};
pub use crate::domain::ports::{ConnectionResolver, RandomSource, Sink};
pub use crate::utils::error::Result;
