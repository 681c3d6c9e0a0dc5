//! Application configuration loaded from environment.

use std::net::{IpAddr, SocketAddr};

use sqlx::postgres::PgConnectOptions;

const DEV_JWT_SECRET: &str = "cardvault_dev_jwt_secret_change_in_production";

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address, built from `HOST` and `PORT` (default `0.0.0.0:5001`).
    pub server_addr: SocketAddr,
    /// PostgreSQL connection settings.
    pub database: DatabaseConfig,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// True when `JWT_SECRET` was missing and the development default is in use.
    pub jwt_secret_is_default: bool,
    /// Require a bearer token on `/add-card` and `/validate-card`.
    pub require_card_auth: bool,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

/// Where the pool connects. `DATABASE_URL` wins over the individual `DB_*` parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: Option<String>,
        password: Option<String>,
        database: Option<String>,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            DatabaseConfig::Url(url) => url.parse(),
            DatabaseConfig::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut opts = PgConnectOptions::new().host(host).port(*port);
                if let Some(user) = user {
                    opts = opts.username(user);
                }
                if let Some(password) = password {
                    opts = opts.password(password);
                }
                if let Some(database) = database {
                    opts = opts.database(database);
                }
                Ok(opts)
            }
        }
    }
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let host: IpAddr = host.parse().map_err(|_| ConfigLoadError::InvalidHost(host))?;
        let port = parse_port(&lookup, "PORT", 5001)?;

        let database = match lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_port(&lookup, "DB_PORT", 5432)?,
                user: lookup("DB_USER"),
                password: lookup("DB_PASS"),
                database: lookup("DB_NAME"),
            },
        };

        let (jwt_secret, jwt_secret_is_default) = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => (secret, false),
            None => (DEV_JWT_SECRET.to_string(), true),
        };

        let require_card_auth = match lookup("REQUIRE_CARD_AUTH") {
            None => false,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" | "off" => false,
                "1" | "true" | "yes" | "on" => true,
                _ => return Err(ConfigLoadError::InvalidFlag("REQUIRE_CARD_AUTH", v)),
            },
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server_addr: SocketAddr::new(host, port),
            database,
            jwt_secret,
            jwt_secret_is_default,
            require_card_auth,
            log_level,
        })
    }
}

fn parse_port<F>(lookup: &F, key: &'static str, default: u16) -> Result<u16, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigLoadError::InvalidPort(key, raw)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid HOST: {0}")]
    InvalidHost(String),
    #[error("Invalid {0}: {1}")]
    InvalidPort(&'static str, String),
    #[error("Invalid {0}: {1} (expected true/false)")]
    InvalidFlag(&'static str, String),
}
