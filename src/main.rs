//! Entry point: load config, wire dependencies, and run the server.

use cardvault::config::Config;
use cardvault::{create_app, db, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.jwt_secret_is_default {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }
    if config.require_card_auth {
        tracing::info!("card routes require a bearer token");
    }

    let db_pool = db::create_pool(&config.database)?;
    if !db::ensure_schema(&db_pool).await {
        tracing::warn!("continuing without verified schema; database requests may fail");
    }

    let addr = config.server_addr;
    let app = create_app(AppState::new(db_pool, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
