//! Reserved column names of the versioned-table schema contract.
//!
//! Every versioned table carries these seven columns beside its domain
//! columns. The engine, the sample schema, and the tests all spell them
//! through these constants.

/// Store-generated surrogate key of a version row; immutable once created.
pub const RECORD_ID: &str = "RECORD_ID";

/// Back-reference to the superseded row; NULL on the first version of a
/// chain.
pub const PREV_RECORD_ID: &str = "PREV_RECORD_ID";

/// 0/1 flag; at most one row per chain is active at any instant.
pub const IS_ACTIVE: &str = "IS_ACTIVE";

pub const CREATED_BY: &str = "CREATED_BY";
pub const CREATED_DATE: &str = "CREATED_DATE";

/// Deletion audit; written only by the single in-place mutation that ends a
/// chain's active lifetime.
pub const DELETED_BY: &str = "DELETED_BY";
pub const DELETED_DATE: &str = "DELETED_DATE";
