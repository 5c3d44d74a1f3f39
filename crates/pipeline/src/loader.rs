//! Table-load step: one directive in, one terminal outcome out.

use sqlx::PgPool;
use tracing::info;

use playlog_core::load::{validate_table_name, LoadDirective, LoadMode};
use playlog_db::warehouse::WarehouseRepo;

use crate::error::PipelineError;

/// Execute one load directive.
///
/// Replace truncates then inserts atomically; append only inserts. Either
/// the step succeeds with the inserted row count, or the underlying store
/// error propagates — no retries, no partial-success state.
pub async fn load_table(pool: &PgPool, directive: &LoadDirective) -> Result<u64, PipelineError> {
    validate_table_name(&directive.target_table)?;

    let mode = match directive.mode {
        LoadMode::Replace => "replace",
        LoadMode::Append => "append",
    };
    info!(table = %directive.target_table, mode, "loading table");

    let rows = WarehouseRepo::load(pool, directive).await?;
    info!(table = %directive.target_table, rows, "table loaded");
    Ok(rows)
}
