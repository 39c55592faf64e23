use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;

const SCHEMA_STATEMENTS: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS employees (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        email VARCHAR(100) NOT NULL UNIQUE,
        department VARCHAR(50) NOT NULL,
        designation VARCHAR(50) NOT NULL,
        date_of_joining DATE NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS ix_employees_name ON employees (name)",
    "CREATE INDEX IF NOT EXISTS ix_employees_department ON employees (department)",
];

/// Builds the connection pool every request borrows from.
pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(config.max_lifetime)
        .test_before_acquire(true)
        .connect(&config.database_url)
        .await
}

/// Creates the `employees` table and its lookup indexes if they are missing.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    info!("Employee schema is ready");
    Ok(())
}
