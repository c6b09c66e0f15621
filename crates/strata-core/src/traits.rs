//! The `StatementGenerator` and `StatementExecutor` traits.
//!
//! Generators turn a table name and field/key maps into a fully-formed
//! [`Statement`]; executors run a statement against a caller-owned
//! transaction. The [`crate::engine::VersionedStore`] composes one of each
//! and depends only on these abstractions, not on any concrete SQL dialect
//! or driver.

use crate::{
  error::{Error, Result},
  statement::Statement,
  table::Table,
  value::{FieldValues, Value},
};

// ─── Generator ───────────────────────────────────────────────────────────────

/// Produces single-table parameterized statements.
///
/// Parameter naming is positional and stable: parameters are assigned
/// sequential ordinal names (`param0`, `param1`, …) in map iteration order.
/// For [`update`](Self::update), key-field parameters are numbered first and
/// value-field parameters continue the sequence. A null-equivalent value in
/// a predicate position renders as `column IS NULL`, contributes no bound
/// parameter, but still consumes its ordinal.
///
/// Generators are dependency-free text producers; their error type is fixed
/// to the core [`Error`].
pub trait StatementGenerator {
  /// `insert into T (…) values (…)` over every entry of `field_values`.
  fn insert(&self, table: &str, field_values: &FieldValues)
  -> Result<Statement>;

  /// `update T set … where …`; the predicate comes from `key_field_values`,
  /// the assignments from `new_field_values`.
  fn update(
    &self,
    table: &str,
    key_field_values: &FieldValues,
    new_field_values: &FieldValues,
  ) -> Result<Statement>;

  /// `delete from T where …`.
  fn delete(&self, table: &str, key_field_values: &FieldValues)
  -> Result<Statement>;

  /// `select … from T [where …]`. An empty key map means no filter —
  /// the predicate clause is omitted entirely.
  fn select(
    &self,
    table: &str,
    select_fields: &[&str],
    key_field_values: &FieldValues,
  ) -> Result<Statement>;

  /// Render the placeholder for a bare parameter name (e.g. `@param0`).
  fn parameter(&self, name: &str) -> Result<String>;
}

// ─── Executor ────────────────────────────────────────────────────────────────

/// Runs statements against a transactional connection owned by the caller.
///
/// Implementations never begin, commit, or roll back the transaction, and
/// bind every parameter of a statement as an input parameter, applying the
/// null-equivalence policy of [`Value::is_null_equivalent`] at bind time
/// regardless of what the generator produced.
///
/// All operations are synchronous and release any prepared-statement or
/// cursor resource on every exit path.
pub trait StatementExecutor {
  /// Core validation and conflict errors convert into this type with `?`.
  type Error: std::error::Error + From<Error> + Send + Sync + 'static;

  /// Run a non-query statement; returns the affected-row count.
  fn execute(&self, statement: &Statement) -> Result<usize, Self::Error>;

  /// Run a query and return the first column of the first row, or
  /// [`Value::Null`] when the result set is empty.
  fn query_scalar(&self, statement: &Statement)
  -> Result<Value, Self::Error>;

  /// Run a query and materialise up to `row_limit` rows (`None` means
  /// unbounded), stopping the read early once the limit is reached.
  /// A limit of zero is rejected with [`Error::InvalidRowLimit`].
  fn query_rows(
    &self,
    statement: &Statement,
    row_limit: Option<usize>,
  ) -> Result<Table, Self::Error>;

  /// The key generated by the most recent insert on this connection, where
  /// the store can report it atomically. Executors without such a mechanism
  /// keep the `None` default and the engine falls back to retrieval by
  /// correlation.
  fn last_insert_id(&self) -> Option<i64> { None }
}
