//! In-memory tabular result of a select, mirroring the result-set schema.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Coarse column type, derived from the declared type of the result schema.
///
/// Expression columns (e.g. `max(RECORD_ID)`) carry no declared type and map
/// to [`ColumnType::Any`]; their cells decode as whatever the store returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
  Integer,
  Real,
  Text,
  Blob,
  Timestamp,
  Any,
}

/// One column of a result set, in result order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
  pub name: String,
  pub ty:   ColumnType,
}

/// Columns plus materialised rows, in the order the store returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
  columns: Vec<Column>,
  rows:    Vec<Vec<Value>>,
}

impl Table {
  pub fn new(columns: Vec<Column>) -> Self {
    Self {
      columns,
      rows: Vec::new(),
    }
  }

  pub fn columns(&self) -> &[Column] { &self.columns }

  pub fn rows(&self) -> &[Vec<Value>] { &self.rows }

  pub fn row_count(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  /// Position of a column by name, if present.
  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c.name == name)
  }

  /// Append a row. The cell count must match the column count.
  pub fn push_row(&mut self, row: Vec<Value>) {
    debug_assert_eq!(row.len(), self.columns.len());
    self.rows.push(row);
  }
}
