//! Fake card handlers: add, validate.

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use tracing::{debug, info};

use crate::db::{card_create, card_find_by_number_and_cvv, NewCard};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::{AddCardRequest, MessageResponse, ValidateCardRequest, ValidateCardResponse};

/// POST /add-card
pub async fn add_card(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<AddCardRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    let card_id = card_create(
        state.db(),
        NewCard {
            card_number: body.card_number.as_deref(),
            cardholder_name: body.cardholder_name.as_deref(),
            cvv: body.cvv.as_deref(),
            balance: body.balance.as_deref(),
        },
    )
    .await?;

    info!(card_id, "fake card added");
    Ok(Json(MessageResponse {
        message: "Fake card added",
    }))
}

/// POST /validate-card
pub async fn validate_card(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<ValidateCardRequest>, AppError>,
) -> Result<Json<ValidateCardResponse>, AppError> {
    let card = card_find_by_number_and_cvv(
        state.db(),
        body.card_number.as_deref(),
        body.cvv.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        debug!("card validation failed");
        AppError::InvalidCard
    })?;

    debug!(card_id = card.id, "card validated");
    Ok(Json(ValidateCardResponse {
        message: "Card validated",
        card: card.into(),
    }))
}
