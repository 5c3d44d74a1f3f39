//! Pure warehouse logic for the playlog pipeline.
//!
//! No database access lives here: this crate defines the quality-check
//! vocabulary (assertions, checks, outcomes) and the dimension-load
//! vocabulary (modes, directives, statement rendering). Execution against
//! Postgres belongs to `playlog-db`.

pub mod error;
pub mod load;
pub mod quality;
pub mod types;
