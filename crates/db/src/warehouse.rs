//! Warehouse execution: scalar fetches for quality checks and
//! insert-from-select loads for dimension and fact tables.

use sqlx::{PgPool, Row};

use playlog_core::load::{insert_statement, truncate_statement, LoadDirective, LoadMode};

/// Provides raw warehouse operations. Statement text is taken verbatim;
/// callers validate identifiers before building a [`LoadDirective`].
pub struct WarehouseRepo;

impl WarehouseRepo {
    /// Execute a scalar-producing statement and return the first column of
    /// the first row, or `None` if the statement produced no rows.
    ///
    /// Store errors (syntax, connectivity, type mismatch) propagate
    /// unmodified.
    pub async fn fetch_scalar(pool: &PgPool, sql: &str) -> Result<Option<i64>, sqlx::Error> {
        let row = sqlx::query(sql).fetch_optional(pool).await?;
        match row {
            Some(row) => Ok(Some(row.try_get::<i64, _>(0)?)),
            None => Ok(None),
        }
    }

    /// Execute a load directive and return the rows inserted.
    ///
    /// Append issues a single insert-from-select. Replace runs truncate and
    /// insert inside one transaction, so the target is never observable in
    /// its truncated-but-unloaded state and a failed insert rolls the
    /// truncate back.
    pub async fn load(pool: &PgPool, directive: &LoadDirective) -> Result<u64, sqlx::Error> {
        let insert = insert_statement(&directive.target_table, &directive.source_query);

        match directive.mode {
            LoadMode::Append => {
                let result = sqlx::query(&insert).execute(pool).await?;
                Ok(result.rows_affected())
            }
            LoadMode::Replace => {
                let mut tx = pool.begin().await?;
                sqlx::query(&truncate_statement(&directive.target_table))
                    .execute(&mut *tx)
                    .await?;
                let result = sqlx::query(&insert).execute(&mut *tx).await?;
                tx.commit().await?;
                Ok(result.rows_affected())
            }
        }
    }
}
