use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;

use crate::domain::payment::ErrorEnvelope;
use crate::fees::engine;
use crate::fees::types::{FeeError, FeeQuoteRequest};

pub async fn quote_fees(Json(req): Json<FeeQuoteRequest>) -> impl IntoResponse {
    if req.ticket_price <= Decimal::ZERO {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorEnvelope::new("INVALID_AMOUNT", "ticket_price must be > 0")),
        )
            .into_response();
    }

    match engine::quote(&req) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => {
            let code = match e {
                FeeError::InvalidPaymentMethod(_) => "INVALID_PAYMENT_METHOD",
                FeeError::UnsupportedChannel(_) => "UNSUPPORTED_CHANNEL",
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorEnvelope::new(code, &e.to_string())),
            )
                .into_response()
        }
    }
}
