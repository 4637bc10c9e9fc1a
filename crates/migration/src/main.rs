use sea_orm_migration::prelude::*;

// Reads DATABASE_URL, e.g. `DATABASE_URL=sqlite://companies.db?mode=rwc migration up`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
