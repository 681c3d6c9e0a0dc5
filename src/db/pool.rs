//! PostgreSQL connection pool.

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::DatabaseConfig;

pub type DbPool = sqlx::PgPool;

/// Build the pool without opening a connection; the first query connects.
pub fn create_pool(database: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = database.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options))
}
