use std::io;

use clap::Parser;
use dotenv::dotenv;
use log::warn;

use employee_directory_backend::config::AppConfig;
use employee_directory_backend::db;
use employee_directory_backend::repositories::PgEmployeeRepository;
use employee_directory_backend::seed::{self, SeedOutcome, DEFAULT_SEED_COUNT};

/// Fills an empty employee table with demo records.
#[derive(Parser, Debug)]
#[command(name = "seed_employees")]
struct Args {
    /// Number of employees to generate.
    #[arg(short, long, default_value_t = DEFAULT_SEED_COUNT)]
    count: usize,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;
    db::init_schema(&pool).await.map_err(io::Error::other)?;

    let repo = PgEmployeeRepository::new(pool.clone());
    if let SeedOutcome::Failed(reason) = seed::seed_employees(&repo, args.count).await {
        warn!("Seeding finished without inserting rows: {}", reason);
    }

    pool.close().await;
    Ok(())
}
