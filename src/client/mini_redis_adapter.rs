use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use mini_redis::client::{self, Client};
use tokio::sync::Mutex;

use super::KvClient;
use crate::error::{ClientError, ClientResult};

/// `mini-redis` tutorial client.
///
/// The library handle requires exclusive access per command, so workers
/// serialize behind an async mutex.
#[derive(Clone)]
pub struct MiniRedisClient {
    conn: Arc<Mutex<Client>>,
}

impl MiniRedisClient {
    pub async fn connect(url: &str) -> ClientResult<Self> {
        // mini-redis dials host:port rather than a redis:// URL.
        let addr = url.strip_prefix("redis://").unwrap_or(url);
        let conn = client::connect(addr)
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(MiniRedisClient {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl KvClient for MiniRedisClient {
    async fn set(&self, key: &str, value: &[u8]) -> ClientResult<()> {
        let mut conn = self.conn.lock().await;
        conn.set(key, Bytes::copy_from_slice(value))
            .await
            .map_err(|e| ClientError::Operation(e.to_string()))
    }

    async fn get(&self, key: &str) -> ClientResult<Option<Vec<u8>>> {
        let mut conn = self.conn.lock().await;
        let value = conn
            .get(key)
            .await
            .map_err(|e| ClientError::Operation(e.to_string()))?;

        Ok(value.map(|v| v.to_vec()))
    }

    async fn close(self) -> ClientResult<()> {
        // The socket closes when the last clone of the handle drops; the
        // workers were joined before close, so this is the last one.
        drop(self.conn);
        Ok(())
    }
}
