//! Auth HTTP handlers: register, login.

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use tracing::{info, warn};

use crate::auth::AuthAppService;
use crate::db::{user_create, user_find_by_username};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<Json<RegisterResponse>, AppError> {
    let password = body
        .password
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("register without password")))?;
    let password_hash = AuthAppService::hash_password_blocking(password).await?;
    let user = user_create(state.db(), body.username.as_deref(), &password_hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(Json(RegisterResponse {
        message: "User registered",
        user: user.into(),
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AppError>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = user_find_by_username(state.db(), body.username.as_deref())
        .await?
        .ok_or_else(|| {
            warn!(username = ?body.username, "login for unknown user");
            AppError::UserNotFound
        })?;

    let password = body
        .password
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("login without password")))?;
    if !AuthAppService::verify_password_blocking(password, user.password).await? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(AppError::InvalidPassword);
    }

    let token = state.tokens().issue(user.id, &user.username)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}
