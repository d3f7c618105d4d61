use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::payment::EWalletPaymentRequest;
use crate::AppState;

pub async fn create_payment_request(
    State(state): State<AppState>,
    Json(req): Json<EWalletPaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.e_wallet_payment(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
