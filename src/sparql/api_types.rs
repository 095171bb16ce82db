//! Wire types for the SPARQL SELECT JSON result format.
//!
//! The endpoint answers `{"results": {"bindings": [...]}}`; a missing
//! `results.bindings` path is an empty result set, not an error.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct SelectResponse {
  #[serde(default)]
  results: Option<ResultSet>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
  #[serde(default)]
  bindings: Vec<Row>,
}

impl SelectResponse {
  pub fn into_rows(self) -> Vec<Row> {
    self.results.map(|set| set.bindings).unwrap_or_default()
  }
}

/// One result tuple: variable name to bound term.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row(HashMap<String, BoundTerm>);

/// A bound value. The type and datatype tags are carried along but the
/// gateway itself only interprets the raw value text.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundTerm {
  #[serde(default)]
  pub value: String,
  #[serde(rename = "type", default)]
  pub term_type: Option<String>,
  #[serde(default)]
  pub datatype: Option<String>,
  #[serde(rename = "xml:lang", default)]
  pub lang: Option<String>,
}

impl Row {
  /// Bound value for `var`. Unbound and empty-string values both count as
  /// absent; partial rows are common in the data.
  pub fn value(&self, var: &str) -> Option<&str> {
    self
      .0
      .get(var)
      .map(|term| term.value.as_str())
      .filter(|value| !value.is_empty())
  }

  /// Bound value for `var`, or an empty string.
  pub fn text(&self, var: &str) -> String {
    self.value(var).unwrap_or_default().to_string()
  }

  /// Owned optional value for `var`.
  pub fn opt(&self, var: &str) -> Option<String> {
    self.value(var).map(str::to_string)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn parses_bindings() {
    let response: SelectResponse = serde_json::from_value(json!({
      "head": {"vars": ["naam", "identifier"]},
      "results": {"bindings": [
        {"naam": {"type": "literal", "value": "Markt"},
         "identifier": {"type": "uri", "value": "https://example.org/1"}},
        {"naam": {"type": "literal", "value": ""}}
      ]}
    }))
    .unwrap();

    let rows = response.into_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value("naam"), Some("Markt"));
    assert_eq!(rows[0].text("identifier"), "https://example.org/1");
    // empty string counts as unbound
    assert_eq!(rows[1].value("naam"), None);
    assert_eq!(rows[1].value("identifier"), None);
  }

  #[test]
  fn missing_bindings_is_empty_not_an_error() {
    let response: SelectResponse = serde_json::from_value(json!({"head": {}})).unwrap();
    assert!(response.into_rows().is_empty());
  }
}
