use crate::domain::model::{RandomNumber, SinkKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves the connection configuration shared by every sink for one
/// invocation. The returned value is dropped when the invocation ends.
#[async_trait]
pub trait ConnectionResolver: Send + Sync {
    type Connection: Send + Sync;

    async fn resolve(&self) -> Result<Self::Connection>;
}

/// Delivers a random number to one messaging backend.
#[async_trait]
pub trait Sink<C>: Send + Sync {
    fn kind(&self) -> SinkKind;

    async fn deliver(&self, connection: &C, value: RandomNumber) -> Result<()>;
}

pub trait RandomSource: Send + Sync {
    fn draw(&self) -> RandomNumber;
}
