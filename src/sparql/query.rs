//! Parameterized query construction.
//!
//! Caller-supplied input only enters query text through a [`Term`]: literals
//! are escaped, IRIs validated at construction. Template fragments never
//! concatenate raw caller text.

use crate::error::LookupError;
use sha2::{Digest, Sha256};
use std::fmt;
use url::Url;

/// A typed value bound into a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
  Literal(String),
  Iri(String),
  Year(i32),
}

impl Term {
  pub fn literal(value: impl Into<String>) -> Self {
    Term::Literal(value.into())
  }

  /// Validated http(s) IRI. Anything that could break out of an IRI token
  /// (angle brackets, quotes, whitespace) is rejected.
  pub fn iri(value: &str) -> Result<Self, LookupError> {
    let invalid = || LookupError::InvalidIdentifier(value.to_string());
    let parsed = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
      return Err(invalid());
    }
    if value.contains(['<', '>', '"', '\\', '`', '{', '}']) || value.chars().any(char::is_whitespace) {
      return Err(invalid());
    }
    Ok(Term::Iri(value.to_string()))
  }

  pub fn year(value: i32) -> Self {
    Term::Year(value)
  }
}

impl fmt::Display for Term {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Term::Literal(value) => write!(f, "\"{}\"", escape_literal(value)),
      Term::Iri(value) => write!(f, "<{}>", value),
      Term::Year(value) => write!(f, "\"{}\"^^xsd:gYear", value),
    }
  }
}

fn escape_literal(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '"' => escaped.push_str("\\\""),
      '\n' => escaped.push_str("\\n"),
      '\r' => escaped.push_str("\\r"),
      '\t' => escaped.push_str("\\t"),
      other => escaped.push(other),
    }
  }
  escaped
}

/// A SELECT query ready for execution: rendered text plus result offset.
#[derive(Debug, Clone)]
pub struct SelectQuery {
  text: String,
  offset: u64,
}

impl SelectQuery {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      offset: 0,
    }
  }

  pub fn with_offset(mut self, offset: u64) -> Self {
    self.offset = offset;
    self
  }

  /// Full query text: prefix block, body, and the offset clause when set.
  pub fn render(&self, prefixes: &str) -> String {
    let mut text = format!("{}{}", prefixes, self.text);
    if self.offset > 0 {
      text.push_str(&format!(" OFFSET {}", self.offset));
    }
    text
  }
}

/// Cache key for a fully-rendered query: content hash under the query
/// namespace. Collisions are a theoretical risk only.
pub fn cache_key(rendered: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(rendered.as_bytes());
  format!("q:{}", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn literal_is_escaped() {
    let term = Term::literal("o\"brien \\ end");
    assert_eq!(term.to_string(), "\"o\\\"brien \\\\ end\"");
  }

  #[test]
  fn literal_injection_attempt_stays_inert() {
    // a quote-breakout attempt ends up as harmless escaped text
    let term = Term::literal("\") } UNION { ?s ?p ?o } #");
    let rendered = term.to_string();
    assert!(rendered.starts_with("\"\\\")"));
    assert!(!rendered.contains("\"\")"));
  }

  #[test]
  fn iri_accepts_plain_http_urls() {
    let term = Term::iri("https://n2t.net/ark:/60537/bsgGtno").unwrap();
    assert_eq!(term.to_string(), "<https://n2t.net/ark:/60537/bsgGtno>");
  }

  #[test]
  fn iri_rejects_breakouts_and_junk() {
    assert!(Term::iri("not a url").is_err());
    assert!(Term::iri("ftp://example.org/x").is_err());
    assert!(Term::iri("https://example.org/x> . ?s ?p ?o").is_err());
    assert!(Term::iri("https://example.org/\"x\"").is_err());
  }

  #[test]
  fn year_renders_as_typed_literal() {
    assert_eq!(Term::year(1830).to_string(), "\"1830\"^^xsd:gYear");
  }

  #[test]
  fn offset_clause_only_when_positive() {
    let query = SelectQuery::new("SELECT * WHERE { ?s ?p ?o }");
    assert!(!query.render("").contains("OFFSET"));
    let query = query.with_offset(20);
    assert!(query.render("").ends_with(" OFFSET 20"));
  }

  #[test]
  fn cache_key_tracks_offset() {
    let base = SelectQuery::new("SELECT * WHERE { ?s ?p ?o }");
    let shifted = base.clone().with_offset(10);
    assert_ne!(cache_key(&base.render("")), cache_key(&shifted.render("")));
    assert_eq!(cache_key(&base.render("")), cache_key(&base.render("")));
  }
}
