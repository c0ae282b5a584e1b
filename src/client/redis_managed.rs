use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Client;

use super::KvClient;
use crate::error::{ClientError, ClientResult};

/// `redis` crate over a managed connection that reconnects on failure.
///
/// Same wire behavior as the multiplexed handle plus the manager's
/// reconnect layer, so the two adapters isolate the cost of that layer.
#[derive(Clone)]
pub struct ManagedClient {
    conn: ConnectionManager,
}

impl ManagedClient {
    pub async fn connect(url: &str) -> ClientResult<Self> {
        let client = Client::open(url).map_err(|e| ClientError::Connection(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(ManagedClient { conn })
    }
}

#[async_trait]
impl KvClient for ManagedClient {
    async fn set(&self, key: &str, value: &[u8]) -> ClientResult<()> {
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| ClientError::Operation(e.to_string()))
    }

    async fn get(&self, key: &str) -> ClientResult<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| ClientError::Operation(e.to_string()))
    }

    async fn close(self) -> ClientResult<()> {
        drop(self.conn);
        Ok(())
    }
}
