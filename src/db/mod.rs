//! Database layer: pool, schema bootstrap and repositories for PostgreSQL.

mod pool;
mod repositories;
mod schema;

pub use pool::{create_pool, DbPool};
pub use repositories::*;
pub use schema::ensure_schema;
