//! User authentication and fake card registry served over a small JSON API.
//!
//! Users register and log in with bcrypt-hashed passwords and receive
//! one-hour HS256 tokens; fake cards are stored in PostgreSQL and can be
//! validated by card number and CVV.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (auth, cards, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let mut card_routes = axum::Router::new()
        .route("/add-card", post(handlers::add_card))
        .route("/validate-card", post(handlers::validate_card));
    if state.config.require_card_auth {
        card_routes = card_routes.route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_bearer,
        ));
    }

    axum::Router::new()
        .route("/health", get(handlers::health))
        .merge(auth_routes)
        .merge(card_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}
