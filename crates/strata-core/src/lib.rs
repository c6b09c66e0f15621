//! Core types and trait definitions for the strata versioned store.
//!
//! This crate is deliberately free of database dependencies. It holds the
//! value model and null-equivalence policy, the immutable parameterized
//! [`Statement`], the tabular [`Table`] result, the generator/executor
//! traits, and the generic [`engine::VersionedStore`] built on top of them.
//! Concrete SQL text lives in `strata-sql`; concrete execution lives in
//! `strata-store-sqlite`.

pub mod columns;
pub mod engine;
pub mod error;
pub mod statement;
pub mod table;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use statement::Statement;
pub use table::{Column, ColumnType, Table};
pub use traits::{StatementExecutor, StatementGenerator};
pub use value::{FieldValues, Value};
