//! Shared application state and the health check.

use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::TokenIssuer;
use crate::config::Config;
use crate::db::DbPool;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub tokens: TokenIssuer,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret);
        Self {
            db,
            tokens,
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }
}

/// GET /health — liveness check.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "cardvault" })),
    )
}
