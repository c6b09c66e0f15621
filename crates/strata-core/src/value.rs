//! The dynamic cell value flowing through statements and results, and the
//! null-equivalence policy applied to it.
//!
//! Callers hand domain data to the engine as [`FieldValues`] — an
//! insertion-ordered map, so the ordinal parameter numbering produced by a
//! statement generator is deterministic. Re-inserting an existing key
//! overwrites the value in place without moving it; the engine relies on
//! this when stamping audit columns over a caller-supplied map.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field/key map for a single statement, in iteration order.
pub type FieldValues = IndexMap<String, Value>;

// ─── Value ───────────────────────────────────────────────────────────────────

/// A single cell value bound into a statement or read out of a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
  Blob(Vec<u8>),
  /// Stored as RFC 3339 text in the data store.
  Timestamp(DateTime<Utc>),
}

impl Value {
  /// Whether this value is stored as SQL NULL.
  ///
  /// Beyond [`Value::Null`] itself, an empty string and the sentinel dates
  /// callers use for "no date" (the minimum representable instant and the
  /// Unix epoch) are treated as NULL. In a predicate position such a value
  /// renders as `column IS NULL` and is not bound; in an insert/update value
  /// position it stays in the parameter set and binds as SQL NULL.
  pub fn is_null_equivalent(&self) -> bool {
    match self {
      Self::Null => true,
      Self::Text(s) => s.is_empty(),
      Self::Timestamp(t) => {
        *t == DateTime::<Utc>::MIN_UTC || *t == DateTime::UNIX_EPOCH
      }
      _ => false,
    }
  }

  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Self::Integer(i) => Some(*i),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }

  /// Name of the variant, for error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::Integer(_) => "integer",
      Self::Real(_) => "real",
      Self::Text(_) => "text",
      Self::Blob(_) => "blob",
      Self::Timestamp(_) => "timestamp",
    }
  }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<i64> for Value {
  fn from(v: i64) -> Self { Self::Integer(v) }
}

impl From<i32> for Value {
  fn from(v: i32) -> Self { Self::Integer(v.into()) }
}

impl From<f64> for Value {
  fn from(v: f64) -> Self { Self::Real(v) }
}

/// Booleans are stored as 0/1 integer flags.
impl From<bool> for Value {
  fn from(v: bool) -> Self { Self::Integer(v.into()) }
}

impl From<&str> for Value {
  fn from(v: &str) -> Self { Self::Text(v.to_owned()) }
}

impl From<String> for Value {
  fn from(v: String) -> Self { Self::Text(v) }
}

impl From<Vec<u8>> for Value {
  fn from(v: Vec<u8>) -> Self { Self::Blob(v) }
}

impl From<DateTime<Utc>> for Value {
  fn from(v: DateTime<Utc>) -> Self { Self::Timestamp(v) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(v: Option<T>) -> Self {
    match v {
      Some(inner) => inner.into(),
      None => Self::Null,
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn null_marker_is_null_equivalent() {
    assert!(Value::Null.is_null_equivalent());
  }

  #[test]
  fn empty_string_is_null_equivalent() {
    assert!(Value::from("").is_null_equivalent());
    assert!(!Value::from("x").is_null_equivalent());
  }

  #[test]
  fn sentinel_dates_are_null_equivalent() {
    assert!(Value::Timestamp(DateTime::<Utc>::MIN_UTC).is_null_equivalent());
    assert!(Value::Timestamp(DateTime::UNIX_EPOCH).is_null_equivalent());

    let real = Utc.with_ymd_and_hms(2017, 9, 9, 12, 0, 0).unwrap();
    assert!(!Value::Timestamp(real).is_null_equivalent());
  }

  #[test]
  fn ordinary_values_are_not_null_equivalent() {
    assert!(!Value::Integer(0).is_null_equivalent());
    assert!(!Value::Real(0.0).is_null_equivalent());
    assert!(!Value::Blob(Vec::new()).is_null_equivalent());
  }

  #[test]
  fn bool_converts_to_integer_flag() {
    assert_eq!(Value::from(true), Value::Integer(1));
    assert_eq!(Value::from(false), Value::Integer(0));
  }

  #[test]
  fn option_converts_to_null_or_inner() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(7i64)), Value::Integer(7));
  }

  #[test]
  fn reinserting_a_key_keeps_its_position() {
    let mut fields = FieldValues::new();
    fields.insert("A".to_owned(), Value::from(1));
    fields.insert("B".to_owned(), Value::from(2));
    fields.insert("A".to_owned(), Value::from(3));

    let keys: Vec<_> = fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["A", "B"]);
    assert_eq!(fields["A"], Value::Integer(3));
  }
}
