//! Error type for `strata-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] strata_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  /// A statement parameter has no matching placeholder in the text —
  /// generator and executor have drifted apart.
  #[error("no parameter named {0:?} in statement text")]
  UnknownParameter(String),

  #[error("column {column:?}: {message}")]
  Decode { column: String, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
