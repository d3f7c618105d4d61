use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::payment::{CreateDirectDebitMethodRequest, DirectDebitPaymentRequest};
use crate::AppState;

pub async fn create_payment_method(
    State(state): State<AppState>,
    Json(req): Json<CreateDirectDebitMethodRequest>,
) -> impl IntoResponse {
    match state.payment_service.create_direct_debit_method(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn create_payment_request(
    State(state): State<AppState>,
    Json(req): Json<DirectDebitPaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.direct_debit_payment(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
