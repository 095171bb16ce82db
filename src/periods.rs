//! Static period reference list.
//!
//! Maps the bounded set of period identifiers to inclusive year ranges. Built
//! once at startup; the latest period is open-ended and runs up to the
//! current calendar year. Caller-supplied period filters are validated here
//! before they reach any query.

use chrono::{Datelike, Utc};

/// Read-only period table. No mutation after construction.
pub struct Periods {
  spans: Vec<(&'static str, (i32, i32))>,
}

impl Periods {
  pub fn new() -> Self {
    Self::with_current_year(Utc::now().year())
  }

  /// The current year is injected so the open-ended period is testable.
  pub fn with_current_year(current_year: i32) -> Self {
    Self {
      spans: vec![
        ("https://n2t.net/ark:/60537/b01v5s3", (1500, 1599)),
        ("https://n2t.net/ark:/60537/b01v5th", (1600, 1699)),
        ("https://n2t.net/ark:/60537/b01v5vx", (1700, 1799)),
        ("https://n2t.net/ark:/60537/b01v5wb", (1800, 1899)),
        ("https://n2t.net/ark:/60537/b01v5xr", (1900, 1949)),
        ("https://n2t.net/ark:/60537/b01v5z5", (1950, 1999)),
        ("https://n2t.net/ark:/60537/b01v60z", (2000, current_year)),
      ],
    }
  }

  pub fn is_valid(&self, identifier: &str) -> bool {
    self.range_of(identifier).is_some()
  }

  pub fn range_of(&self, identifier: &str) -> Option<(i32, i32)> {
    self
      .spans
      .iter()
      .find(|(id, _)| *id == identifier)
      .map(|(_, range)| *range)
  }
}

impl Default for Periods {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_period_resolves() {
    let periods = Periods::with_current_year(2024);
    assert!(periods.is_valid("https://n2t.net/ark:/60537/b01v5s3"));
    assert_eq!(
      periods.range_of("https://n2t.net/ark:/60537/b01v5xr"),
      Some((1900, 1949))
    );
  }

  #[test]
  fn unknown_period_is_rejected() {
    let periods = Periods::with_current_year(2024);
    assert!(!periods.is_valid("https://n2t.net/ark:/60537/nope"));
    assert_eq!(periods.range_of("https://n2t.net/ark:/60537/nope"), None);
  }

  #[test]
  fn latest_period_is_open_ended() {
    let periods = Periods::with_current_year(2031);
    assert_eq!(
      periods.range_of("https://n2t.net/ark:/60537/b01v60z"),
      Some((2000, 2031))
    );
  }
}
