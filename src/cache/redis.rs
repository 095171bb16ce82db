//! Direct-protocol cache backend.
//!
//! Speaks the key-value wire protocol over a managed connection. Every
//! operation is bounded by a short timeout so a degraded backend cannot
//! stall request latency.

use color_eyre::{eyre::eyre, Result};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::time::timeout;

const OP_TIMEOUT: Duration = Duration::from_secs(3);
const SCAN_BATCH: usize = 100;

pub struct RedisCache {
  conn: ConnectionManager,
}

impl RedisCache {
  /// Connect to a `redis://` or `rediss://` URL (auth in the URL).
  pub async fn connect(url: &str) -> Result<Self> {
    let client = redis::Client::open(url).map_err(|e| eyre!("Invalid cache URL {}: {}", url, e))?;
    let conn = timeout(OP_TIMEOUT, ConnectionManager::new(client))
      .await
      .map_err(|_| eyre!("Connect to {} timed out", url))?
      .map_err(|e| eyre!("Connect to {} failed: {}", url, e))?;
    Ok(Self { conn })
  }

  pub async fn get(&self, key: &str) -> Result<Option<String>> {
    let mut conn = self.conn.clone();
    timeout(OP_TIMEOUT, conn.get::<_, Option<String>>(key))
      .await
      .map_err(|_| eyre!("GET timed out"))?
      .map_err(|e| eyre!("GET failed: {}", e))
  }

  pub async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
    let mut conn = self.conn.clone();
    timeout(OP_TIMEOUT, conn.set_ex::<_, _, ()>(key, value, ttl_seconds))
      .await
      .map_err(|_| eyre!("SETEX timed out"))?
      .map_err(|e| eyre!("SETEX failed: {}", e))
  }

  /// Delete all keys under `prefix` with an iterating scan, never a blocking
  /// full-keyspace listing. Returns the number of keys removed.
  pub async fn clear(&self, prefix: &str) -> Result<usize> {
    let mut conn = self.conn.clone();
    let pattern = format!("{}*", prefix);
    let mut cursor: u64 = 0;
    let mut deleted = 0usize;

    loop {
      let (next, keys): (u64, Vec<String>) = timeout(
        OP_TIMEOUT,
        redis::cmd("SCAN")
          .arg(cursor)
          .arg("MATCH")
          .arg(&pattern)
          .arg("COUNT")
          .arg(SCAN_BATCH)
          .query_async(&mut conn),
      )
      .await
      .map_err(|_| eyre!("SCAN timed out"))?
      .map_err(|e| eyre!("SCAN failed: {}", e))?;

      if !keys.is_empty() {
        let removed: usize = timeout(OP_TIMEOUT, conn.del(&keys))
          .await
          .map_err(|_| eyre!("DEL timed out"))?
          .map_err(|e| eyre!("DEL failed: {}", e))?;
        deleted += removed;
      }

      cursor = next;
      if cursor == 0 {
        break;
      }
    }

    Ok(deleted)
  }
}
