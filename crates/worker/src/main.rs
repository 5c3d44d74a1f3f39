//! Pipeline runner: fact load, dimension loads, then quality checks,
//! in one fixed sequential pass. Staging tables are expected to be
//! populated before this binary runs.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playlog_pipeline::{definitions, load_table, run_quality_checks};

mod config;

use config::WorkerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlog_worker=info,playlog_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WorkerConfig::from_env()?;
    let pool = playlog_db::create_pool(&config.database_url, config.max_connections).await?;
    playlog_db::health_check(&pool).await?;

    tracing::info!("starting warehouse load");

    load_table(&pool, &definitions::fact_load()).await?;
    for directive in definitions::dimension_loads() {
        load_table(&pool, &directive).await?;
    }

    let outcomes = run_quality_checks(&pool, &definitions::quality_checks()).await?;
    tracing::info!(checks = outcomes.len(), "warehouse load complete");

    Ok(())
}
