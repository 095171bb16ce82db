//! In-process cache backend.
//!
//! Used by tests and as a zero-dependency local mode. Honours TTLs with lazy
//! expiry on read.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
  value: String,
  expires_at: Instant,
}

#[derive(Default)]
pub struct MemoryCache {
  entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &str) -> Option<String> {
    let mut entries = self.entries.lock().ok()?;
    match entries.get(key) {
      Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
      Some(_) => {
        entries.remove(key);
        None
      }
      None => None,
    }
  }

  pub fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> bool {
    let Ok(mut entries) = self.entries.lock() else {
      return false;
    };
    entries.insert(
      key.to_string(),
      Entry {
        value: value.to_string(),
        expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
      },
    );
    true
  }

  /// Drop all entries under `prefix`, returning how many were removed.
  pub fn clear(&self, prefix: &str) -> usize {
    let Ok(mut entries) = self.entries.lock() else {
      return 0;
    };
    let before = entries.len();
    entries.retain(|key, _| !key.starts_with(prefix));
    before - entries.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip() {
    let cache = MemoryCache::new();
    assert!(cache.put("k", "v", 60));
    assert_eq!(cache.get("k"), Some("v".to_string()));
  }

  #[test]
  fn expired_entries_are_misses() {
    let cache = MemoryCache::new();
    cache.put("k", "v", 0);
    assert_eq!(cache.get("k"), None);
  }

  #[test]
  fn clear_only_touches_the_prefix() {
    let cache = MemoryCache::new();
    cache.put("app:a", "1", 60);
    cache.put("app:b", "2", 60);
    cache.put("app:c", "3", 60);
    cache.put("other:d", "4", 60);
    cache.put("other:e", "5", 60);

    assert_eq!(cache.clear("app:"), 3);
    assert_eq!(cache.get("app:a"), None);
    assert_eq!(cache.get("other:d"), Some("4".to_string()));
    assert_eq!(cache.get("other:e"), Some("5".to_string()));
  }
}
