//! REST-fronted cache backend.
//!
//! Talks to an HTTP facade over the key-value store: `/get/{key}`,
//! `/setex/{key}/{ttl}/{value}`, `/flushdb`. All calls carry a bearer token
//! and treat any status >= 400 as failure.

use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct Reply {
  result: Option<String>,
}

pub struct RestCache {
  http: reqwest::Client,
  base: String,
  token: String,
}

impl RestCache {
  pub fn new(base: &str, token: &str) -> Result<Self> {
    let http = reqwest::Client::builder()
      .connect_timeout(CONNECT_TIMEOUT)
      .timeout(REQUEST_TIMEOUT)
      .build()
      .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

    Ok(Self {
      http,
      base: base.trim_end_matches('/').to_string(),
      token: token.to_string(),
    })
  }

  async fn call(&self, url: String) -> Result<String> {
    let response = self
      .http
      .get(&url)
      .bearer_auth(&self.token)
      .send()
      .await
      .map_err(|e| eyre!("Request to {} failed: {}", url, e))?;

    let status = response.status();
    if status.as_u16() >= 400 {
      return Err(eyre!("HTTP {} from {}", status, url));
    }

    response
      .text()
      .await
      .map_err(|e| eyre!("Failed to read response body: {}", e))
  }

  pub async fn get(&self, key: &str) -> Result<Option<String>> {
    let body = self
      .call(format!("{}/get/{}", self.base, urlencoding::encode(key)))
      .await?;
    let reply: Reply =
      serde_json::from_str(&body).map_err(|e| eyre!("Malformed reply: {}", e))?;
    Ok(reply.result)
  }

  pub async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
    self
      .call(format!(
        "{}/setex/{}/{}/{}",
        self.base,
        urlencoding::encode(key),
        ttl_seconds,
        urlencoding::encode(value)
      ))
      .await
      .map(|_| ())
  }

  /// The facade exposes no key iteration, so a namespace clear falls back to
  /// flushing the whole database. The deleted count is unknown and reported
  /// as zero.
  pub async fn clear(&self) -> Result<usize> {
    self.call(format!("{}/flushdb", self.base)).await?;
    warn!("cache cleared via flushdb; deleted count unknown");
    Ok(0)
  }
}
