/// All warehouse counts and keys are PostgreSQL BIGINT.
pub type DbId = i64;
