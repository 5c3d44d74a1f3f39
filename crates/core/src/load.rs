//! Dimension-load vocabulary and SQL statement rendering.
//!
//! A [`LoadDirective`] names a target table, an insert-from-select source
//! statement, and a [`LoadMode`]. Replace is the literal contract
//! truncate-then-insert: no filtering is inferred from the source query.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Modes and directives
// ---------------------------------------------------------------------------

/// How a target table is populated from its source select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Truncate the target, then insert the source rows. Idempotent.
    Replace,
    /// Insert the source rows on top of whatever the target holds.
    Append,
}

/// One independent table-load instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadDirective {
    pub target_table: String,
    pub source_query: String,
    pub mode: LoadMode,
}

impl LoadDirective {
    pub fn new(
        target_table: impl Into<String>,
        source_query: impl Into<String>,
        mode: LoadMode,
    ) -> Self {
        Self {
            target_table: target_table.into(),
            source_query: source_query.into(),
            mode,
        }
    }
}

// ---------------------------------------------------------------------------
// Statement rendering
// ---------------------------------------------------------------------------

/// Render the insert-from-select statement for a target table.
pub fn insert_statement(target_table: &str, source_query: &str) -> String {
    format!("INSERT INTO {target_table}\n{source_query}")
}

/// Render the truncate statement issued before a replace-mode insert.
pub fn truncate_statement(target_table: &str) -> String {
    format!("TRUNCATE TABLE {target_table}")
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a table identifier before it is interpolated into SQL text.
///
/// Accepts ASCII alphanumerics and underscores; the first character must
/// not be a digit.
pub fn validate_table_name(name: &str) -> Result<(), CoreError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "invalid table name: '{name}'"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
