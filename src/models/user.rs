//! User request/response bodies.

use serde::{Deserialize, Serialize};

use crate::db::UserRow;

/// Fields are optional: missing values reach the store as NULL.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub password: Option<String>,
}

/// User as returned to clients. Carries no password hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
}

impl From<UserRow> for PublicUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}
