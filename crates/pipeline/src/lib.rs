//! Warehouse pipeline steps: data-quality validation and table loads.
//!
//! The orchestrator (whatever schedules these steps) supplies the static
//! pipeline definition — an ordered list of [`QualityCheck`]s and
//! [`LoadDirective`]s — and invokes [`run_quality_checks`] and
//! [`load_table`] as discrete steps. Step ordering and retries belong to
//! the orchestrator, not to this crate.
//!
//! [`QualityCheck`]: playlog_core::quality::QualityCheck
//! [`LoadDirective`]: playlog_core::load::LoadDirective

pub mod definitions;
pub mod error;
pub mod loader;
pub mod validator;

pub use error::PipelineError;
pub use loader::load_table;
pub use validator::run_quality_checks;
