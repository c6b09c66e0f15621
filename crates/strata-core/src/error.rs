//! Error types for `strata-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("argument {0:?} must not be empty")]
  EmptyArgument(&'static str),

  #[error("collection {0:?} must not be empty")]
  EmptyCollection(&'static str),

  #[error("row limit must be greater than zero, got {0}")]
  InvalidRowLimit(usize),

  /// The conditional deactivation matched no row — the target version does
  /// not exist or was already superseded or deleted by another writer.
  #[error("no active version with record id {0}")]
  VersionConflict(i64),

  #[error("scalar value has type {found}, expected {expected}")]
  ScalarType {
    expected: &'static str,
    found:    &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fail with [`Error::EmptyArgument`] when a required string is blank.
pub fn ensure_not_blank(name: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::EmptyArgument(name));
  }
  Ok(())
}

/// Fail with [`Error::EmptyCollection`] when a required map or list has no
/// entries.
pub fn ensure_not_empty(name: &'static str, len: usize) -> Result<()> {
  if len == 0 {
    return Err(Error::EmptyCollection(name));
  }
  Ok(())
}
