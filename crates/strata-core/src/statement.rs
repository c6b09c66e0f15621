//! [`Statement`] — a fully-formed parameterized statement.
//!
//! A statement is immutable once constructed: generators return it by value
//! and executors only read it. The text refers to parameters with an `@`
//! prefix (`@param0`); the parameter list stores the bare names in bind
//! order. Value data never appears in the text — only trusted table and
//! column identifiers are interpolated.

use serde::{Deserialize, Serialize};

use crate::{
  error::{Result, ensure_not_blank},
  value::Value,
};

/// Literal statement text plus its ordered parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
  text:       String,
  parameters: Vec<(String, Value)>,
}

impl Statement {
  /// A statement with no parameters, e.g. an ad-hoc `select *`.
  pub fn new(text: impl Into<String>) -> Result<Self> {
    Self::with_parameters(text, Vec::new())
  }

  /// A statement with the given parameters, in bind order.
  pub fn with_parameters(
    text: impl Into<String>,
    parameters: Vec<(String, Value)>,
  ) -> Result<Self> {
    let text = text.into();
    ensure_not_blank("text", &text)?;
    Ok(Self { text, parameters })
  }

  pub fn text(&self) -> &str { &self.text }

  pub fn parameters(&self) -> &[(String, Value)] { &self.parameters }

  /// Look up a parameter by bare name.
  pub fn parameter(&self, name: &str) -> Option<&Value> {
    self
      .parameters
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, v)| v)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  #[test]
  fn rejects_empty_text() {
    assert_eq!(Statement::new("").unwrap_err(), Error::EmptyArgument("text"));
    assert_eq!(
      Statement::new("   ").unwrap_err(),
      Error::EmptyArgument("text")
    );
    assert_eq!(
      Statement::with_parameters("", vec![("p".into(), Value::Null)])
        .unwrap_err(),
      Error::EmptyArgument("text")
    );
  }

  #[test]
  fn keeps_parameters_in_bind_order() {
    let stmt = Statement::with_parameters(
      "select 1",
      vec![
        ("param0".to_owned(), Value::from(1)),
        ("param1".to_owned(), Value::from("x")),
      ],
    )
    .unwrap();

    assert_eq!(stmt.text(), "select 1");
    assert_eq!(stmt.parameters().len(), 2);
    assert_eq!(stmt.parameter("param1"), Some(&Value::from("x")));
    assert_eq!(stmt.parameter("missing"), None);
  }
}
