//! Console rendering for tabular results.

use strata_core::{Table, Value};

/// Text shown for one cell; NULL renders as an empty cell.
fn cell_text(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Integer(i) => i.to_string(),
    Value::Real(r) => r.to_string(),
    Value::Text(s) => s.clone(),
    Value::Blob(b) => format!("<{} bytes>", b.len()),
    Value::Timestamp(t) => t.to_rfc3339(),
  }
}

/// Render `table` with `|`-separated columns padded to the widest cell.
pub fn format_table(table: &Table) -> String {
  let mut widths: Vec<usize> =
    table.columns().iter().map(|c| c.name.len()).collect();
  let rows: Vec<Vec<String>> = table
    .rows()
    .iter()
    .map(|row| row.iter().map(cell_text).collect())
    .collect();

  for row in &rows {
    for (i, text) in row.iter().enumerate() {
      widths[i] = widths[i].max(text.len());
    }
  }

  let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len());
  let mut out = String::new();

  out.push_str(&divider);
  out.push('\n');
  for (i, column) in table.columns().iter().enumerate() {
    out.push_str(&format!("{:<width$}|", column.name, width = widths[i]));
  }
  out.push('\n');
  out.push_str(&divider);
  out.push('\n');

  for row in &rows {
    for (i, text) in row.iter().enumerate() {
      out.push_str(&format!("{text:<width$}|", width = widths[i]));
    }
    out.push('\n');
  }

  out.push_str(&divider);
  out
}

#[cfg(test)]
mod tests {
  use strata_core::{Column, ColumnType};

  use super::*;

  #[test]
  fn pads_columns_to_widest_cell() {
    let mut table = Table::new(vec![
      Column {
        name: "ID".to_owned(),
        ty:   ColumnType::Integer,
      },
      Column {
        name: "SUPPLIER".to_owned(),
        ty:   ColumnType::Text,
      },
    ]);
    table.push_row(vec![Value::Integer(1), Value::from("ACME LLC.")]);
    table.push_row(vec![Value::Integer(2), Value::Null]);

    let rendered = format_table(&table);
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines[1], "ID|SUPPLIER |");
    assert_eq!(lines[3], "1 |ACME LLC.|");
    assert_eq!(lines[4], "2 |         |");
    assert_eq!(lines[0], "-".repeat(13));
  }
}
