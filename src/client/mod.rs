//! Client adapters over the measured Redis-protocol stacks.

use async_trait::async_trait;

use crate::error::ClientResult;

pub mod mini_redis_adapter;
pub mod redis_managed;
pub mod redis_multiplexed;

pub use mini_redis_adapter::MiniRedisClient;
pub use redis_managed::ManagedClient;
pub use redis_multiplexed::MultiplexedClient;

/// The capability set every measured client stack must provide.
///
/// A handle is created once per backend and shared by every worker of that
/// backend's benchmark, so implementations must be cheap to clone and safe
/// for concurrent use.
#[async_trait]
pub trait KvClient: Send + Sync + Clone {
    /// SET key value
    async fn set(&self, key: &str, value: &[u8]) -> ClientResult<()>;

    /// GET key - returns the stored value if present
    async fn get(&self, key: &str) -> ClientResult<Option<Vec<u8>>>;

    /// Release the underlying connection
    async fn close(self) -> ClientResult<()>;
}
