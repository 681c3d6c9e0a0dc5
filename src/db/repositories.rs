//! Repositories: users and fake cards.

use crate::error::AppResult;
use rust_decimal::Decimal;
use sqlx::FromRow;

use super::DbPool;

// ---- User ----

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    /// bcrypt hash.
    pub password: String,
}

/// A missing `username` is bound as NULL and rejected by the NOT NULL constraint.
pub async fn user_create(
    pool: &DbPool,
    username: Option<&str>,
    password_hash: &str,
) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, password)
        VALUES ($1, $2)
        RETURNING id, username, password
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn user_find_by_username(
    pool: &DbPool,
    username: Option<&str>,
) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, password FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ---- Fake cards ----

#[derive(Debug, FromRow)]
pub struct CardRow {
    pub id: i32,
    pub card_number: String,
    pub cardholder_name: String,
    pub cvv: String,
    pub balance: Decimal,
}

/// Card fields exactly as the client sent them; the table constraints do the checking.
pub struct NewCard<'a> {
    pub card_number: Option<&'a str>,
    pub cardholder_name: Option<&'a str>,
    pub cvv: Option<&'a str>,
    /// Decimal text, cast to NUMERIC by Postgres.
    pub balance: Option<&'a str>,
}

pub async fn card_create(pool: &DbPool, card: NewCard<'_>) -> AppResult<i32> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO fake_cards (card_number, cardholder_name, cvv, balance)
        VALUES ($1, $2, $3, $4::numeric)
        RETURNING id
        "#,
    )
    .bind(card.card_number)
    .bind(card.cardholder_name)
    .bind(card.cvv)
    .bind(card.balance)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

pub async fn card_find_by_number_and_cvv(
    pool: &DbPool,
    card_number: Option<&str>,
    cvv: Option<&str>,
) -> AppResult<Option<CardRow>> {
    let row = sqlx::query_as::<_, CardRow>(
        r#"
        SELECT id, card_number, cardholder_name, cvv, balance
        FROM fake_cards
        WHERE card_number = $1 AND cvv = $2
        "#,
    )
    .bind(card_number)
    .bind(cvv)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
