//! [`VersionedStore`] — append-only versioning with a CRUD-shaped surface.
//!
//! Every logical update or delete produces a new immutable row (or flips one
//! flag) instead of mutating data in place. A chain of versions is linked
//! through `PREV_RECORD_ID`; at most one row per chain is active. The engine
//! is generic over a statement generator and executor and carries no
//! database dependency itself.

use chrono::Utc;

use crate::{
  columns,
  error::{Error, Result, ensure_not_blank, ensure_not_empty},
  traits::{StatementExecutor, StatementGenerator},
  value::{FieldValues, Value},
};

/// The versioned-storage engine, assembled from a generator/executor pair
/// and the identity of the user performing the changes.
///
/// All operations run inside the transaction the executor was built around;
/// the engine neither opens nor closes transactions and performs no locking.
/// Concurrency safety rests on the conditional deactivation statement acting
/// as a compare-and-swap on `(RECORD_ID, IS_ACTIVE)`: a writer that loses
/// the race observes zero affected rows and gets
/// [`Error::VersionConflict`]. The engine never retries; that decision
/// belongs to the caller's transaction boundary.
#[derive(Debug)]
pub struct VersionedStore<G, E> {
  generator: G,
  executor:  E,
  user_id:   String,
}

impl<G, E> VersionedStore<G, E>
where
  G: StatementGenerator,
  E: StatementExecutor,
{
  /// Assemble an engine. Fails when `user_id` is blank.
  pub fn new(
    generator: G,
    executor: E,
    user_id: impl Into<String>,
  ) -> Result<Self> {
    let user_id = user_id.into();
    ensure_not_blank("user_id", &user_id)?;
    Ok(Self {
      generator,
      executor,
      user_id,
    })
  }

  pub fn generator(&self) -> &G { &self.generator }

  pub fn executor(&self) -> &E { &self.executor }

  pub fn user_id(&self) -> &str { &self.user_id }

  /// Create the first version of a new chain and return its `RECORD_ID`.
  ///
  /// The caller's fields are stamped with `CREATED_BY`, `CREATED_DATE` and
  /// `IS_ACTIVE = 1`; caller-supplied values for those columns are
  /// overwritten. The generated key is read back atomically where the
  /// executor supports it. Otherwise the engine issues a
  /// `select max(RECORD_ID)` correlated on the just-written audit triple —
  /// which can misattribute the id if the same user inserts twice within
  /// the store's timestamp resolution while both rows are active.
  pub fn insert(
    &self,
    table: &str,
    field_values: &FieldValues,
  ) -> Result<i64, E::Error> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("field_values", field_values.len())?;

    let mut full = field_values.clone();
    full.insert(
      columns::CREATED_BY.to_owned(),
      Value::from(self.user_id.as_str()),
    );
    full.insert(columns::CREATED_DATE.to_owned(), Value::from(Utc::now()));
    full.insert(columns::IS_ACTIVE.to_owned(), Value::from(true));

    let insert = self.generator.insert(table, &full)?;
    self.executor.execute(&insert)?;

    if let Some(id) = self.executor.last_insert_id() {
      return Ok(id);
    }

    // Fallback: correlate on the audit triple written above.
    let mut keys = FieldValues::new();
    for column in [columns::CREATED_BY, columns::CREATED_DATE, columns::IS_ACTIVE]
    {
      keys.insert(column.to_owned(), full[column].clone());
    }

    let expr = format!("max({})", columns::RECORD_ID);
    let select = self.generator.select(table, &[expr.as_str()], &keys)?;
    let scalar = self.executor.query_scalar(&select)?;
    let id = scalar.as_integer().ok_or(Error::ScalarType {
      expected: "integer",
      found:    scalar.type_name(),
    })?;
    Ok(id)
  }

  /// Supersede the active version `record_id` with a new version holding
  /// `new_field_values`, and return the new version's `RECORD_ID`.
  ///
  /// Domain columns are never updated in place: the old row is deactivated
  /// by the concurrency guard and a fresh row is inserted with
  /// `PREV_RECORD_ID` pointing back at it.
  pub fn update(
    &self,
    table: &str,
    record_id: i64,
    new_field_values: &FieldValues,
  ) -> Result<i64, E::Error> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("new_field_values", new_field_values.len())?;

    self.deactivate(table, record_id, FieldValues::new())?;

    let mut successor = new_field_values.clone();
    successor.insert(
      columns::PREV_RECORD_ID.to_owned(),
      Value::from(record_id),
    );
    self.insert(table, &successor)
  }

  /// Logically delete the active version `record_id`: flip it inactive and
  /// stamp the deletion audit columns. No successor row is created, leaving
  /// the chain with zero active rows.
  pub fn delete(&self, table: &str, record_id: i64) -> Result<(), E::Error> {
    ensure_not_blank("table", table)?;

    let mut audit = FieldValues::new();
    audit.insert(
      columns::DELETED_BY.to_owned(),
      Value::from(self.user_id.as_str()),
    );
    audit.insert(columns::DELETED_DATE.to_owned(), Value::from(Utc::now()));

    self.deactivate(table, record_id, audit)
  }

  /// The optimistic-concurrency guard shared by update and delete: one
  /// conditional statement equivalent to
  /// `update T set IS_ACTIVE=0, … where RECORD_ID=? and IS_ACTIVE=1`.
  fn deactivate(
    &self,
    table: &str,
    record_id: i64,
    extra_fields: FieldValues,
  ) -> Result<(), E::Error> {
    let mut keys = FieldValues::new();
    keys.insert(columns::RECORD_ID.to_owned(), Value::from(record_id));
    keys.insert(columns::IS_ACTIVE.to_owned(), Value::from(true));

    let mut set = FieldValues::new();
    set.insert(columns::IS_ACTIVE.to_owned(), Value::from(false));
    set.extend(extra_fields);

    let guard = self.generator.update(table, &keys, &set)?;
    let rows_affected = self.executor.execute(&guard)?;
    if rows_affected == 0 {
      return Err(Error::VersionConflict(record_id).into());
    }
    Ok(())
  }
}
