//! Data-quality check vocabulary and evaluation logic.
//!
//! A [`QualityCheck`] pairs a scalar-producing SQL statement with an
//! expected value and an [`Assertion`]. Evaluation is pure: the caller
//! fetches the scalar, this module turns it into a [`CheckOutcome`].

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

/// Comparison applied between a check's observed scalar and its expected
/// value. Closed set so the dispatch stays exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assertion {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
}

impl Assertion {
    /// Evaluate the assertion. `actual` is the scalar the warehouse
    /// returned; `expected` comes from the check definition.
    pub fn evaluate(self, expected: DbId, actual: DbId) -> bool {
        match self {
            Assertion::Equals => actual == expected,
            Assertion::NotEquals => actual != expected,
            Assertion::LessThan => actual < expected,
            Assertion::GreaterThan => actual > expected,
        }
    }

    /// Operator symbol used in outcome messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Assertion::Equals => "=",
            Assertion::NotEquals => "!=",
            Assertion::LessThan => "<",
            Assertion::GreaterThan => ">",
        }
    }
}

// ---------------------------------------------------------------------------
// Checks and outcomes
// ---------------------------------------------------------------------------

/// A single data-quality check, defined once per pipeline and never mutated.
///
/// `query` must produce at least one row whose first column is a BIGINT
/// scalar (every shipped check is a `COUNT`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCheck {
    pub name: String,
    pub query: String,
    pub expected: DbId,
    pub assertion: Assertion,
}

impl QualityCheck {
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        expected: DbId,
        assertion: Assertion,
    ) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            expected,
            assertion,
        }
    }
}

/// Result of evaluating one check against a live scalar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check_name: String,
    pub message: String,
    pub success: bool,
}

/// Derive an outcome from a check and the observed scalar.
///
/// `None` means the query returned no rows where a scalar was expected.
/// That is a caller error and always fails the check, never a silent pass.
pub fn outcome_for(check: &QualityCheck, actual: Option<DbId>) -> CheckOutcome {
    match actual {
        Some(actual) => {
            let success = check.assertion.evaluate(check.expected, actual);
            CheckOutcome {
                check_name: check.name.clone(),
                message: format!(
                    "actual {actual} should be {} expected {}",
                    check.assertion.symbol(),
                    check.expected
                ),
                success,
            }
        }
        None => CheckOutcome {
            check_name: check.name.clone(),
            message: "query returned no rows; a scalar result was expected".to_string(),
            success: false,
        },
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregated result across one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitySummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Compute a summary from a slice of outcomes.
pub fn summarize(outcomes: &[CheckOutcome]) -> QualitySummary {
    let passed = outcomes.iter().filter(|o| o.success).count();
    QualitySummary {
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
