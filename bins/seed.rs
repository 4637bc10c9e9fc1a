//! One-shot seeding: `seed [COUNT]` replaces every company with COUNT fake rows.
//! COUNT defaults to `seed.count` from config.toml (10 when absent).

use anyhow::{anyhow, Context};
use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

fn parse_count(arg: Option<String>, fallback: usize) -> anyhow::Result<usize> {
    match arg {
        None => Ok(fallback),
        Some(raw) => {
            let n: usize = raw.parse().with_context(|| format!("invalid row count: {raw}"))?;
            if n == 0 {
                return Err(anyhow!("row count must be >= 1"));
            }
            Ok(n)
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env()?;
    let count = parse_count(std::env::args().nth(1), cfg.seed.count)?;

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    let mut rng = StdRng::from_entropy();
    let report = service::seed::seed_companies(&db, count, &mut rng).await;
    models::db::close(db).await?;

    let report = report?;
    info!(service = "seed", event = "done", deleted = report.deleted, inserted = report.inserted, "seeding finished");
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "seeding failed");
            std::process::ExitCode::FAILURE
        }
    }
}
