//! Idempotent table creation run once at startup.

use tracing::{error, info};

use super::DbPool;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(50) UNIQUE NOT NULL,
        password TEXT NOT NULL
    )
"#;

const CREATE_FAKE_CARDS: &str = r#"
    CREATE TABLE IF NOT EXISTS fake_cards (
        id SERIAL PRIMARY KEY,
        card_number VARCHAR(16) UNIQUE NOT NULL,
        cardholder_name VARCHAR(100) NOT NULL,
        cvv VARCHAR(3) NOT NULL,
        balance DECIMAL(10,2) NOT NULL
    )
"#;

/// Create `users` and `fake_cards` if absent. Returns `false` after logging a
/// failure; the caller keeps serving and later queries report the missing tables.
pub async fn ensure_schema(pool: &DbPool) -> bool {
    for (table, ddl) in [("users", CREATE_USERS), ("fake_cards", CREATE_FAKE_CARDS)] {
        if let Err(e) = sqlx::query(ddl).execute(pool).await {
            error!(table, error = %e, "error creating tables");
            return false;
        }
    }
    info!("database tables are set up");
    true
}
