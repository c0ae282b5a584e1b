use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Client;

use super::KvClient;
use crate::error::{ClientError, ClientResult};

/// `redis` crate over a single multiplexed async connection.
///
/// All workers pipeline their commands onto the same socket; cloning the
/// handle clones a sender onto that socket, not the connection itself.
#[derive(Clone)]
pub struct MultiplexedClient {
    conn: MultiplexedConnection,
}

impl MultiplexedClient {
    pub async fn connect(url: &str) -> ClientResult<Self> {
        let client = Client::open(url).map_err(|e| ClientError::Connection(e.to_string()))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(MultiplexedClient { conn })
    }
}

#[async_trait]
impl KvClient for MultiplexedClient {
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
        // Dropping the last clone of the connection releases the socket.
        drop(self.conn);
        Ok(())
    }
}
