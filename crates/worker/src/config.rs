/// Worker configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Postgres connection URL. Required.
    pub database_url: String,
    /// Connection pool size (default: `5`).
    pub max_connections: u32,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default    |
    /// |----------------------|------------|
    /// | `DATABASE_URL`       | (required) |
    /// | `DB_MAX_CONNECTIONS` | `5`        |
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .map_err(|_| anyhow::anyhow!("DB_MAX_CONNECTIONS must be a valid u32"))?;

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
