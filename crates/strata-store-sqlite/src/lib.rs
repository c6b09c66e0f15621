//! SQLite backend for the strata versioned store.
//!
//! All access is synchronous and runs inside a transaction owned by the
//! caller — every engine call blocks on the database round trip, and commit
//! or rollback stays entirely in the caller's hands.

mod bind;
mod executor;

pub mod error;

use rusqlite::Transaction;
use strata_core::engine::VersionedStore;
use strata_sql::SqlGenerator;

pub use error::{Error, Result};
pub use executor::SqliteExecutor;

/// Assemble a [`VersionedStore`] over SQLite from its parts: the SQL
/// statement generator and an executor bound to `tx`, acting as `user_id`.
///
/// Changes are visible inside `tx` immediately and durable only once the
/// caller commits.
pub fn versioned_store<'t>(
  tx: &'t Transaction<'t>,
  user_id: &str,
) -> strata_core::Result<VersionedStore<SqlGenerator, SqliteExecutor<'t>>> {
  VersionedStore::new(SqlGenerator::new(), SqliteExecutor::new(tx), user_id)
}
