//! Mapping of request and booking failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use boxoffice_core::{BookingError, InventoryError};

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, not JSON, or fields missing / of the wrong type.
    MalformedRequest(String),
    UnknownCategory(String),
    InsufficientInventory(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_)
            | ApiError::UnknownCategory(_)
            | ApiError::InsufficientInventory(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Inventory(InventoryError::UnknownCategory(name)) => {
                ApiError::UnknownCategory(format!("Invalid ticket type: {}", name))
            }
            BookingError::Inventory(e @ InventoryError::InsufficientInventory { .. }) => {
                ApiError::InsufficientInventory(e.to_string())
            }
            BookingError::Inventory(
                e @ (InventoryError::QuantityOverflow { .. } | InventoryError::PriceOverflow { .. }),
            ) => ApiError::MalformedRequest(e.to_string()),
            e @ (BookingError::Ledger(_) | BookingError::LockPoisoned) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::MalformedRequest(msg)
            | ApiError::UnknownCategory(msg)
            | ApiError::InsufficientInventory(msg) => msg,
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                msg
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
