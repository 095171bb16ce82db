use thiserror::Error;

/// Validation failures on caller-supplied filters.
///
/// These are the only failures surfaced to the boundary layer as structured
/// errors; transport and decode problems are absorbed where they occur and
/// degrade to empty results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
  /// Period identifier is not in the reference list.
  #[error("unknown period identifier: {0}")]
  UnknownPeriod(String),

  /// Identifier is not a usable http(s) IRI.
  #[error("invalid identifier: {0}")]
  InvalidIdentifier(String),

  /// Status filter value outside the accepted set.
  #[error("invalid status filter: {0}")]
  InvalidStatus(String),
}
