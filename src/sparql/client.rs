//! Remote query execution with transparent caching.

use crate::cache::CacheStore;
use color_eyre::{eyre::eyre, Result};
use reqwest::header;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::api_types::{Row, SelectResponse};
use super::queries::PREFIXES;
use super::query::{cache_key, SelectQuery};

const USER_AGENT: &str = concat!("heritage-gateway/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const RESULT_FORMAT: &str = "application/sparql-results+json";

/// Client for the remote SPARQL endpoint.
///
/// Every query goes through the cache first; the raw response body is cached
/// on success. Transport and decode failures degrade to an empty row set:
/// callers cannot tell "no match" from "service down", which the surrounding
/// API relies on for its uniform not-found responses.
pub struct SparqlClient {
  http: reqwest::Client,
  endpoint: Url,
  cache: CacheStore,
}

impl SparqlClient {
  pub fn new(endpoint: &str, cache: CacheStore) -> Result<Self> {
    let endpoint = Url::parse(endpoint)
      .map_err(|e| eyre!("Invalid SPARQL endpoint {}: {}", endpoint, e))?;

    let http = reqwest::Client::builder()
      .user_agent(USER_AGENT)
      .connect_timeout(CONNECT_TIMEOUT)
      .timeout(REQUEST_TIMEOUT)
      .build()
      .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

    Ok(Self {
      http,
      endpoint,
      cache,
    })
  }

  pub fn cache(&self) -> &CacheStore {
    &self.cache
  }

  /// Run a SELECT query and return its rows.
  pub async fn select(&self, query: &SelectQuery) -> Vec<Row> {
    let text = query.render(PREFIXES);
    let key = cache_key(&text);

    let body = match self.cache.get(&key).await {
      Some(cached) => {
        debug!(key, "query served from cache");
        cached
      }
      None => {
        let fetched = match self.fetch(&text).await {
          Ok(body) => body,
          Err(err) => {
            warn!(error = %err, "SPARQL call failed");
            return Vec::new();
          }
        };
        self.cache.put(&key, &fetched, self.cache.ttl()).await;
        fetched
      }
    };

    match serde_json::from_str::<SelectResponse>(&body) {
      Ok(response) => response.into_rows(),
      Err(err) => {
        warn!(error = %err, "malformed SPARQL result payload");
        Vec::new()
      }
    }
  }

  async fn fetch(&self, text: &str) -> Result<String> {
    let response = self
      .http
      .get(self.endpoint.clone())
      .query(&[("query", text)])
      .header(header::ACCEPT, RESULT_FORMAT)
      .send()
      .await
      .map_err(|e| eyre!("Request to {} failed: {}", self.endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
      return Err(eyre!("Endpoint returned {}", status));
    }

    response
      .text()
      .await
      .map_err(|e| eyre!("Failed to read response body: {}", e))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::CacheStore;

  fn sample_body() -> String {
    serde_json::json!({
      "results": {"bindings": [
        {"naam": {"type": "literal", "value": "Markt"}}
      ]}
    })
    .to_string()
  }

  #[tokio::test]
  async fn cached_payload_short_circuits_the_network() {
    // endpoint is unroutable; rows can only come from the cache
    let cache = CacheStore::memory();
    let client = SparqlClient::new("http://127.0.0.1:9/sparql", cache).unwrap();

    let query = SelectQuery::new("SELECT * WHERE { ?s ?p ?o }");
    let key = cache_key(&query.render(PREFIXES));
    client.cache().put(&key, &sample_body(), 60).await;

    let rows = client.select(&query).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("naam"), Some("Markt"));
  }

  #[tokio::test]
  async fn unreachable_endpoint_degrades_to_empty_rows() {
    let client = SparqlClient::new("http://127.0.0.1:9/sparql", CacheStore::disabled()).unwrap();
    let rows = client.select(&SelectQuery::new("SELECT * WHERE { ?s ?p ?o }")).await;
    assert!(rows.is_empty());
  }

  #[tokio::test]
  async fn malformed_cached_payload_degrades_to_empty_rows() {
    let cache = CacheStore::memory();
    let client = SparqlClient::new("http://127.0.0.1:9/sparql", cache).unwrap();

    let query = SelectQuery::new("SELECT * WHERE { ?s ?p ?o }");
    let key = cache_key(&query.render(PREFIXES));
    client.cache().put(&key, "not json", 60).await;

    assert!(client.select(&query).await.is_empty());
  }
}
