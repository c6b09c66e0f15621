//! Conversions between [`Value`] and the SQLite wire types.
//!
//! Timestamps are stored as RFC 3339 text. Decoding is driven by the
//! declared column type of the result schema: a `Timestamp` column parses
//! its text cells back into `DateTime<Utc>`; every other column decodes the
//! raw storage class as-is.

use chrono::{DateTime, Utc};
use rusqlite::{
  ToSql,
  types::{ToSqlOutput, Value as SqliteValue, ValueRef},
};
use strata_core::{Column, ColumnType, Value};

use crate::{Error, Result};

// ─── Binding ─────────────────────────────────────────────────────────────────

/// Adapter binding a [`Value`] as an input parameter.
///
/// The null-equivalence policy is applied again here, independently of the
/// generator: a null-equivalent value always reaches the store as SQL NULL.
pub struct BoundValue<'a>(pub &'a Value);

impl ToSql for BoundValue<'_> {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
    if self.0.is_null_equivalent() {
      return Ok(ToSqlOutput::Owned(SqliteValue::Null));
    }
    Ok(match self.0 {
      Value::Null => ToSqlOutput::Owned(SqliteValue::Null),
      Value::Integer(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
      Value::Real(r) => ToSqlOutput::Owned(SqliteValue::Real(*r)),
      Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
      Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
      Value::Timestamp(t) => {
        ToSqlOutput::Owned(SqliteValue::Text(t.to_rfc3339()))
      }
    })
  }
}

// ─── Column types ────────────────────────────────────────────────────────────

/// Map a declared column type to a [`ColumnType`] using SQLite's affinity
/// rules; date/time declarations are recognised before the generic text
/// classes so `DATETIME` columns round-trip as timestamps.
pub fn column_type_for(decl_type: Option<&str>) -> ColumnType {
  let Some(decl) = decl_type else {
    return ColumnType::Any;
  };
  let decl = decl.to_ascii_uppercase();

  if decl.contains("DATE") || decl.contains("TIME") {
    ColumnType::Timestamp
  } else if decl.contains("INT") {
    ColumnType::Integer
  } else if decl.contains("CHAR") || decl.contains("CLOB") || decl.contains("TEXT")
  {
    ColumnType::Text
  } else if decl.contains("BLOB") {
    ColumnType::Blob
  } else if decl.contains("REAL")
    || decl.contains("FLOA")
    || decl.contains("DOUB")
    || decl.contains("DEC")
    || decl.contains("NUM")
  {
    ColumnType::Real
  } else {
    ColumnType::Any
  }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode a raw storage-class value with no schema information.
pub fn decode_raw(value: ValueRef<'_>) -> Value {
  match value {
    ValueRef::Null => Value::Null,
    ValueRef::Integer(i) => Value::Integer(i),
    ValueRef::Real(r) => Value::Real(r),
    ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
    ValueRef::Blob(b) => Value::Blob(b.to_vec()),
  }
}

/// Decode one cell of `column`, parsing timestamps where the schema says so.
pub fn decode_cell(value: ValueRef<'_>, column: &Column) -> Result<Value> {
  if column.ty == ColumnType::Timestamp
    && let ValueRef::Text(t) = value
  {
    let text = String::from_utf8_lossy(t);
    let parsed =
      DateTime::parse_from_rfc3339(&text).map_err(|e| Error::Decode {
        column:  column.name.clone(),
        message: format!("invalid timestamp {text:?}: {e}"),
      })?;
    return Ok(Value::Timestamp(parsed.with_timezone(&Utc)));
  }
  Ok(decode_raw(value))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn declared_types_map_by_affinity() {
    assert_eq!(column_type_for(Some("INTEGER")), ColumnType::Integer);
    assert_eq!(column_type_for(Some("int")), ColumnType::Integer);
    assert_eq!(column_type_for(Some("NVARCHAR(255)")), ColumnType::Text);
    assert_eq!(column_type_for(Some("TEXT")), ColumnType::Text);
    assert_eq!(column_type_for(Some("BLOB")), ColumnType::Blob);
    assert_eq!(column_type_for(Some("REAL")), ColumnType::Real);
    assert_eq!(column_type_for(Some("DECIMAL(18, 2)")), ColumnType::Real);
    assert_eq!(column_type_for(Some("DATETIME")), ColumnType::Timestamp);
    assert_eq!(column_type_for(Some("TIMESTAMP")), ColumnType::Timestamp);
    assert_eq!(column_type_for(None), ColumnType::Any);
  }

  #[test]
  fn timestamp_cells_parse_rfc3339() {
    let column = Column {
      name: "CREATED_DATE".to_owned(),
      ty:   ColumnType::Timestamp,
    };
    let decoded =
      decode_cell(ValueRef::Text(b"2017-09-09T12:00:00+00:00"), &column)
        .unwrap();
    assert!(matches!(decoded, Value::Timestamp(_)));

    let err =
      decode_cell(ValueRef::Text(b"not a date"), &column).unwrap_err();
    assert!(matches!(err, Error::Decode { column, .. } if column == "CREATED_DATE"));
  }

  #[test]
  fn null_timestamp_cells_stay_null() {
    let column = Column {
      name: "DELETED_DATE".to_owned(),
      ty:   ColumnType::Timestamp,
    };
    assert_eq!(decode_cell(ValueRef::Null, &column).unwrap(), Value::Null);
  }
}
