//! Card request/response bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::CardRow;

/// Fields are passed to the store as text; `balance` may be a JSON number or string.
#[derive(Debug, Deserialize)]
pub struct AddCardRequest {
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub card_number: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub cardholder_name: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub cvv: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub balance: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateCardRequest {
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub card_number: Option<String>,
    #[serde(default, deserialize_with = "super::field_as_text")]
    pub cvv: Option<String>,
}

/// Stored card as returned by `/validate-card`. `balance` serializes as a string such as `"100.00"`.
#[derive(Debug, Serialize)]
pub struct Card {
    pub id: i32,
    pub card_number: String,
    pub cardholder_name: String,
    pub cvv: String,
    pub balance: Decimal,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Self {
            id: row.id,
            card_number: row.card_number,
            cardholder_name: row.cardholder_name,
            cvv: row.cvv,
            balance: row.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ValidateCardResponse {
    pub message: &'static str,
    pub card: Card,
}
