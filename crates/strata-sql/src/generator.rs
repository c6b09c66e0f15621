//! [`SqlGenerator`] — the SQL implementation of [`StatementGenerator`].

use strata_core::{
  FieldValues, Statement, StatementGenerator, Value,
  error::{Result, ensure_not_blank, ensure_not_empty},
};

/// Generates single-table insert/update/delete/select statements with
/// positionally-named parameters.
///
/// Statement text interpolates only table and column identifiers — these
/// must originate from trusted code, never from end-user input. Values are
/// always carried as parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlGenerator;

impl SqlGenerator {
  pub fn new() -> Self { Self }

  /// Build the `and`-joined predicate parts over `keys`, appending bound
  /// parameters to `parameters`. A null-equivalent value renders as
  /// `column is NULL` and is not bound, but still consumes its ordinal so
  /// the numbering of later parameters is unaffected by how many keys
  /// were null.
  fn predicate_parts(
    &self,
    keys: &FieldValues,
    next_ordinal: &mut usize,
    parameters: &mut Vec<(String, Value)>,
  ) -> Result<Vec<String>> {
    let mut parts = Vec::with_capacity(keys.len());
    for (column, value) in keys {
      let name = format!("param{}", *next_ordinal);
      *next_ordinal += 1;

      if value.is_null_equivalent() {
        parts.push(format!("{column} is NULL"));
      } else {
        parts.push(format!("{column}={}", self.parameter(&name)?));
        parameters.push((name, value.clone()));
      }
    }
    Ok(parts)
  }
}

impl StatementGenerator for SqlGenerator {
  fn insert(
    &self,
    table: &str,
    field_values: &FieldValues,
  ) -> Result<Statement> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("field_values", field_values.len())?;

    let mut parameters = Vec::with_capacity(field_values.len());
    let mut placeholders = Vec::with_capacity(field_values.len());
    for (ordinal, (_, value)) in field_values.iter().enumerate() {
      let name = format!("param{ordinal}");
      placeholders.push(self.parameter(&name)?);
      parameters.push((name, value.clone()));
    }

    let columns = field_values
      .keys()
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(", ");
    let text = format!(
      "insert into {table} ({columns}) values ({})",
      placeholders.join(", ")
    );
    Statement::with_parameters(text, parameters)
  }

  fn update(
    &self,
    table: &str,
    key_field_values: &FieldValues,
    new_field_values: &FieldValues,
  ) -> Result<Statement> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("key_field_values", key_field_values.len())?;
    ensure_not_empty("new_field_values", new_field_values.len())?;

    let mut parameters = Vec::new();
    let mut ordinal = 0;

    let where_parts =
      self.predicate_parts(key_field_values, &mut ordinal, &mut parameters)?;

    let mut set_parts = Vec::with_capacity(new_field_values.len());
    for (column, value) in new_field_values {
      let name = format!("param{ordinal}");
      ordinal += 1;
      set_parts.push(format!("{column}={}", self.parameter(&name)?));
      parameters.push((name, value.clone()));
    }

    let text = format!(
      "update {table} set {} where {}",
      set_parts.join(", "),
      where_parts.join(" and ")
    );
    Statement::with_parameters(text, parameters)
  }

  fn delete(
    &self,
    table: &str,
    key_field_values: &FieldValues,
  ) -> Result<Statement> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("key_field_values", key_field_values.len())?;

    let mut parameters = Vec::new();
    let mut ordinal = 0;
    let where_parts =
      self.predicate_parts(key_field_values, &mut ordinal, &mut parameters)?;

    let text =
      format!("delete from {table} where {}", where_parts.join(" and "));
    Statement::with_parameters(text, parameters)
  }

  fn select(
    &self,
    table: &str,
    select_fields: &[&str],
    key_field_values: &FieldValues,
  ) -> Result<Statement> {
    ensure_not_blank("table", table)?;
    ensure_not_empty("select_fields", select_fields.len())?;

    // An empty key map is allowed here: no filter, return all rows.
    let mut parameters = Vec::new();
    let mut ordinal = 0;
    let where_parts =
      self.predicate_parts(key_field_values, &mut ordinal, &mut parameters)?;

    let projection = select_fields.join(", ");
    let text = if where_parts.is_empty() {
      format!("select {projection} from {table}")
    } else {
      format!(
        "select {projection} from {table} where {}",
        where_parts.join(" and ")
      )
    };
    Statement::with_parameters(text, parameters)
  }

  fn parameter(&self, name: &str) -> Result<String> {
    ensure_not_blank("name", name)?;
    Ok(format!("@{name}"))
  }
}
