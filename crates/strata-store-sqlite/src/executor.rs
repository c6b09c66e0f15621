//! [`SqliteExecutor`] — the SQLite implementation of [`StatementExecutor`].

use rusqlite::Transaction;
use strata_core::{
  Column, Statement, StatementExecutor, Table, Value,
  error::Error as CoreError,
};

use crate::{
  Error, Result,
  bind::{BoundValue, column_type_for, decode_cell, decode_raw},
};

/// Runs statements against a caller-owned transaction.
///
/// The executor never begins, commits, or rolls back: the caller opened the
/// transaction and decides its fate, including after a
/// [`CoreError::VersionConflict`]. Prepared statements are dropped on every
/// exit path.
pub struct SqliteExecutor<'t> {
  tx: &'t Transaction<'t>,
}

impl<'t> SqliteExecutor<'t> {
  pub fn new(tx: &'t Transaction<'t>) -> Self { Self { tx } }

  /// Bind every parameter of `statement` by its `@`-prefixed name.
  fn bind(
    &self,
    prepared: &mut rusqlite::Statement<'_>,
    statement: &Statement,
  ) -> Result<()> {
    for (name, value) in statement.parameters() {
      let placeholder = format!("@{name}");
      let index = prepared
        .parameter_index(&placeholder)?
        .ok_or_else(|| Error::UnknownParameter(name.clone()))?;
      prepared.raw_bind_parameter(index, BoundValue(value))?;
    }
    Ok(())
  }
}

impl StatementExecutor for SqliteExecutor<'_> {
  type Error = Error;

  fn execute(&self, statement: &Statement) -> Result<usize> {
    let mut prepared = self.tx.prepare(statement.text())?;
    self.bind(&mut prepared, statement)?;
    Ok(prepared.raw_execute()?)
  }

  fn query_scalar(&self, statement: &Statement) -> Result<Value> {
    let mut prepared = self.tx.prepare(statement.text())?;
    self.bind(&mut prepared, statement)?;

    let mut rows = prepared.raw_query();
    match rows.next()? {
      Some(row) => Ok(decode_raw(row.get_ref(0)?)),
      None => Ok(Value::Null),
    }
  }

  fn query_rows(
    &self,
    statement: &Statement,
    row_limit: Option<usize>,
  ) -> Result<Table> {
    if row_limit == Some(0) {
      return Err(CoreError::InvalidRowLimit(0).into());
    }

    let mut prepared = self.tx.prepare(statement.text())?;
    self.bind(&mut prepared, statement)?;

    let columns: Vec<Column> = prepared
      .columns()
      .iter()
      .map(|c| Column {
        name: c.name().to_owned(),
        ty:   column_type_for(c.decl_type()),
      })
      .collect();

    let limit = row_limit.unwrap_or(usize::MAX);
    let mut table = Table::new(columns);

    let mut rows = prepared.raw_query();
    while table.row_count() < limit
      && let Some(row) = rows.next()?
    {
      let mut cells = Vec::with_capacity(table.columns().len());
      for (i, column) in table.columns().iter().enumerate() {
        cells.push(decode_cell(row.get_ref(i)?, column)?);
      }
      table.push_row(cells);
    }

    Ok(table)
  }

  /// SQLite reports the generated rowid atomically on the connection, so
  /// the engine never needs the correlation fallback here.
  fn last_insert_id(&self) -> Option<i64> {
    Some(self.tx.last_insert_rowid())
  }
}
