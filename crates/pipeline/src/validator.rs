//! Sequential data-quality validation over a live warehouse.

use sqlx::PgPool;
use tracing::{debug, info, warn};

use playlog_core::quality::{outcome_for, summarize, CheckOutcome, QualityCheck};
use playlog_db::warehouse::WarehouseRepo;

use crate::error::PipelineError;

/// Run every check, in order, against the warehouse.
///
/// All checks always execute; there is no short-circuit on first failure,
/// so the error carries the complete failure set. On success the full
/// outcome list is returned for logging. A store error (bad SQL,
/// connectivity) aborts the pass and propagates unmodified.
pub async fn run_quality_checks(
    pool: &PgPool,
    checks: &[QualityCheck],
) -> Result<Vec<CheckOutcome>, PipelineError> {
    let mut outcomes = Vec::with_capacity(checks.len());

    for check in checks {
        debug!(check = %check.name, "running quality check");
        let actual = WarehouseRepo::fetch_scalar(pool, &check.query).await?;
        let outcome = outcome_for(check, actual);
        if outcome.success {
            debug!(check = %check.name, "check passed");
        } else {
            warn!(check = %check.name, message = %outcome.message, "check failed");
        }
        outcomes.push(outcome);
    }

    let summary = summarize(&outcomes);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "quality check pass finished"
    );

    if summary.failed > 0 {
        let failed = outcomes.into_iter().filter(|o| !o.success).collect();
        return Err(PipelineError::QualityChecksFailed { failed });
    }
    Ok(outcomes)
}
