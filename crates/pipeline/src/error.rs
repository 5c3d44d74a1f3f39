use playlog_core::error::CoreError;
use playlog_core::quality::CheckOutcome;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// One or more quality checks failed. Carries every failed outcome so
    /// callers can report the full failure set, not just that some failed.
    #[error("{} quality check(s) failed: {}", failed.len(), format_failed(failed))]
    QualityChecksFailed { failed: Vec<CheckOutcome> },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

fn format_failed(failed: &[CheckOutcome]) -> String {
    failed
        .iter()
        .map(|o| o.check_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
