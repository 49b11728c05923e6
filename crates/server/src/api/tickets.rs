//! Box office API handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use boxoffice_core::{Event, Order, TicketQuantities, GENERAL_ADMISSION, VIP};

use super::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for reviewing or confirming a purchase
#[derive(Debug, Deserialize)]
pub struct PurchaseBody {
    pub general_admission: u32,
    pub vip: u32,
}

impl From<PurchaseBody> for TicketQuantities {
    fn from(body: PurchaseBody) -> Self {
        TicketQuantities::new()
            .with(GENERAL_ADMISSION, body.general_admission)
            .with(VIP, body.vip)
    }
}

/// Request body for cancelling tickets
#[derive(Debug, Deserialize)]
pub struct CancelBody {
    /// Category name, e.g. "vip"
    pub ticket_type: String,
    pub quantity: u32,
}

/// Response for review and confirm
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub message: String,
    pub total_cost: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /event-details
pub async fn event_details(State(state): State<Arc<AppState>>) -> Result<Json<Event>, ApiError> {
    let event = state.box_office().event_details()?;
    Ok(Json(event))
}

/// POST /review-ticket
///
/// Prices the request against current inventory without reserving anything.
pub async fn review_ticket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseBody>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(body) = payload?;
    let requested = TicketQuantities::from(body);

    let quote = state.box_office().review(&requested)?;

    Ok(Json(QuoteResponse {
        message: quote.message,
        total_cost: quote.total_cost,
    }))
}

/// POST /confirm-ticket
pub async fn confirm_ticket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseBody>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(body) = payload?;

    let receipt = state.box_office().book(body.into())?;

    Ok(Json(QuoteResponse {
        message: receipt.message,
        total_cost: receipt.total_cost,
    }))
}

/// POST /cancel-ticket
pub async fn cancel_ticket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CancelBody>, JsonRejection>,
) -> Result<Json<CancelResponse>, ApiError> {
    let Json(body) = payload?;

    let cancellation = state
        .box_office()
        .cancel(&body.ticket_type, body.quantity)?;

    Ok(Json(CancelResponse {
        message: cancellation.message,
    }))
}

/// GET /order-history
pub async fn order_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.box_office().order_history()?;
    Ok(Json(orders))
}
