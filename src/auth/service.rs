//! Password hashing (bcrypt, cost 10).

use crate::error::{AppError, AppResult};

/// Work factor for new hashes; matches rows written by the earlier deployment.
pub const BCRYPT_COST: u32 = 10;

pub struct AuthAppService;

impl AuthAppService {
    pub fn hash_password(password: &str) -> AppResult<String> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))
    }

    /// `Ok(false)` on mismatch; a stored value that is not a bcrypt hash is an error.
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verify hash: {}", e)))
    }

    /// [`Self::hash_password`] on the blocking pool so the runtime keeps serving.
    pub async fn hash_password_blocking(password: String) -> AppResult<String> {
        tokio::task::spawn_blocking(move || Self::hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
    }

    pub async fn verify_password_blocking(password: String, hash: String) -> AppResult<bool> {
        tokio::task::spawn_blocking(move || Self::verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
    }
}
