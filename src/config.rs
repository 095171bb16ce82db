use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://www.goudatijdmachine.nl/sparql11";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

fn default_ttl() -> u64 {
  3600
}

fn default_redis_url() -> String {
  DEFAULT_REDIS_URL.to_string()
}

fn default_endpoint() -> String {
  DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  /// SPARQL endpoint of the remote graph store.
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
  #[serde(default)]
  pub cache: CacheConfig,
}

/// Which cache backend to talk to. Decided once at startup; the rest of the
/// code never branches on it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum CacheConfig {
  /// Direct protocol connection; `rediss://` URLs get TLS, credentials go in
  /// the URL.
  Redis {
    #[serde(default = "default_redis_url")]
    url: String,
    #[serde(default = "default_ttl")]
    ttl_seconds: u64,
  },
  /// HTTP facade in front of the store, bearer-token authenticated.
  Rest {
    url: String,
    #[serde(default)]
    token: Option<String>,
    #[serde(default = "default_ttl")]
    ttl_seconds: u64,
  },
  Off,
}

impl Default for CacheConfig {
  fn default() -> Self {
    CacheConfig::Redis {
      url: default_redis_url(),
      ttl_seconds: default_ttl(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      endpoint: default_endpoint(),
      cache: CacheConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./heritage-gateway.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/heritage-gateway/config.yaml
  ///
  /// Without a config file the built-in defaults apply.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => {
        debug!("no config file found, using defaults");
        Ok(Self::default())
      }
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("heritage-gateway.yaml");
    if local.exists() {
      return Some(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("heritage-gateway").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_yaml::from_str(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(config)
  }

  /// Apply environment overrides for the cache backend.
  ///
  /// A `KV_REST_API_URL` + `KV_REST_API_TOKEN` pair selects the REST facade;
  /// `REDIS_URL` selects a direct connection. The configured TTL is kept.
  pub fn apply_env(mut self) -> Self {
    let ttl_seconds = match &self.cache {
      CacheConfig::Redis { ttl_seconds, .. } | CacheConfig::Rest { ttl_seconds, .. } => *ttl_seconds,
      CacheConfig::Off => default_ttl(),
    };

    if let (Ok(url), Ok(token)) = (
      std::env::var("KV_REST_API_URL"),
      std::env::var("KV_REST_API_TOKEN"),
    ) {
      self.cache = CacheConfig::Rest {
        url,
        token: Some(token),
        ttl_seconds,
      };
    } else if let Ok(url) = std::env::var("REDIS_URL") {
      self.cache = CacheConfig::Redis { url, ttl_seconds };
    } else if let CacheConfig::Rest { token: token @ None, .. } = &mut self.cache {
      // the token may come from the environment even when the URL is configured
      if let Ok(value) = std::env::var("KV_REST_API_TOKEN") {
        *token = Some(value);
      }
    }

    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_without_a_file() {
    let config = Config::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert!(matches!(config.cache, CacheConfig::Redis { .. }));
  }

  #[test]
  fn parses_a_rest_cache_block() {
    let config: Config = serde_yaml::from_str(
      "endpoint: https://example.org/sparql\ncache:\n  backend: rest\n  url: https://kv.example.org\n  ttl_seconds: 120\n",
    )
    .unwrap();
    match config.cache {
      CacheConfig::Rest { url, token, ttl_seconds } => {
        assert_eq!(url, "https://kv.example.org");
        assert_eq!(token, None);
        assert_eq!(ttl_seconds, 120);
      }
      other => panic!("unexpected cache config: {:?}", other),
    }
  }

  #[test]
  fn parses_cache_off() {
    let config: Config = serde_yaml::from_str("cache:\n  backend: off\n").unwrap();
    assert!(matches!(config.cache, CacheConfig::Off));
  }
}
