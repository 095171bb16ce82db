//! Key-value cache with swappable backends and graceful degradation.
//!
//! The backend is chosen once at construction from typed configuration;
//! callers never branch on it. All entries live under a fixed application
//! namespace so a clear only purges this application's keys in a shared
//! store. No operation here ever fails the caller: a broken backend behaves
//! like an empty cache.

mod memory;
mod redis;
mod rest;

use crate::config::CacheConfig;
use memory::MemoryCache;
use redis::RedisCache;
use rest::RestCache;
use tracing::{info, warn};

/// Namespace prefix for every key this application writes.
pub const NAMESPACE: &str = "hg:";

const DEFAULT_TTL: u64 = 3600;

enum Backend {
  Redis(RedisCache),
  Rest(RestCache),
  Memory(MemoryCache),
  Disabled,
}

pub struct CacheStore {
  backend: Backend,
  ttl: u64,
}

impl CacheStore {
  /// Build the store from configuration. Backend trouble degrades to the
  /// disabled store with a warning; construction itself never fails.
  pub async fn connect(config: &CacheConfig) -> Self {
    match config {
      CacheConfig::Redis { url, ttl_seconds } => match RedisCache::connect(url).await {
        Ok(backend) => {
          info!(url, "cache connected");
          Self {
            backend: Backend::Redis(backend),
            ttl: *ttl_seconds,
          }
        }
        Err(err) => {
          warn!(url, error = %err, "cache unavailable, running without");
          Self::disabled()
        }
      },
      CacheConfig::Rest {
        url,
        token,
        ttl_seconds,
      } => {
        let Some(token) = token else {
          warn!(url, "REST cache has no token, running without");
          return Self::disabled();
        };
        match RestCache::new(url, token) {
          Ok(backend) => Self {
            backend: Backend::Rest(backend),
            ttl: *ttl_seconds,
          },
          Err(err) => {
            warn!(url, error = %err, "cache unavailable, running without");
            Self::disabled()
          }
        }
      }
      CacheConfig::Off => Self::disabled(),
    }
  }

  pub fn disabled() -> Self {
    Self {
      backend: Backend::Disabled,
      ttl: DEFAULT_TTL,
    }
  }

  /// In-process store; handy for tests and offline use.
  pub fn memory() -> Self {
    Self {
      backend: Backend::Memory(MemoryCache::new()),
      ttl: DEFAULT_TTL,
    }
  }

  pub fn ttl(&self) -> u64 {
    self.ttl
  }

  fn namespaced(key: &str) -> String {
    format!("{}{}", NAMESPACE, key)
  }

  /// Cached value for `key`, or `None`. Backend failures log and read as a
  /// miss.
  pub async fn get(&self, key: &str) -> Option<String> {
    let key = Self::namespaced(key);
    let looked_up = match &self.backend {
      Backend::Redis(backend) => backend.get(&key).await,
      Backend::Rest(backend) => backend.get(&key).await,
      Backend::Memory(backend) => Ok(backend.get(&key)),
      Backend::Disabled => Ok(None),
    };
    match looked_up {
      Ok(value) => value,
      Err(err) => {
        warn!(key, error = %err, "cache get failed");
        None
      }
    }
  }

  /// Best-effort write. A failed put means "proceed without caching", never
  /// a request failure.
  pub async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> bool {
    let key = Self::namespaced(key);
    let stored = match &self.backend {
      Backend::Redis(backend) => backend.put(&key, value, ttl_seconds).await,
      Backend::Rest(backend) => backend.put(&key, value, ttl_seconds).await,
      Backend::Memory(backend) => {
        backend.put(&key, value, ttl_seconds);
        Ok(())
      }
      Backend::Disabled => return false,
    };
    match stored {
      Ok(()) => true,
      Err(err) => {
        warn!(key, error = %err, "cache put failed");
        false
      }
    }
  }

  /// Purge this application's namespace. Returns the number of entries
  /// removed, zero when the backend cannot count or is unavailable.
  pub async fn clear(&self) -> usize {
    let cleared = match &self.backend {
      Backend::Redis(backend) => backend.clear(NAMESPACE).await,
      Backend::Rest(backend) => backend.clear().await,
      Backend::Memory(backend) => Ok(backend.clear(NAMESPACE)),
      Backend::Disabled => Ok(0),
    };
    match cleared {
      Ok(count) => count,
      Err(err) => {
        warn!(error = %err, "cache clear failed");
        0
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn round_trip_through_the_store() {
    let cache = CacheStore::memory();
    assert!(cache.put("q:abc", "payload", 60).await);
    assert_eq!(cache.get("q:abc").await, Some("payload".to_string()));
  }

  #[tokio::test]
  async fn disabled_store_degrades_to_misses() {
    let cache = CacheStore::disabled();
    assert!(!cache.put("q:abc", "payload", 60).await);
    assert_eq!(cache.get("q:abc").await, None);
    assert_eq!(cache.clear().await, 0);
  }

  #[tokio::test]
  async fn unreachable_backend_degrades_to_disabled() {
    let config = CacheConfig::Redis {
      url: "redis://127.0.0.1:1/".to_string(),
      ttl_seconds: 60,
    };
    let cache = CacheStore::connect(&config).await;
    assert!(!cache.put("k", "v", 60).await);
    assert_eq!(cache.get("k").await, None);
  }

  #[tokio::test]
  async fn clear_counts_namespaced_entries() {
    let cache = CacheStore::memory();
    cache.put("a", "1", 60).await;
    cache.put("b", "2", 60).await;
    cache.put("c", "3", 60).await;
    assert_eq!(cache.clear().await, 3);
    assert_eq!(cache.get("a").await, None);
  }
}
