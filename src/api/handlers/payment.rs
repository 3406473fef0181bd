use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::webhook::PaymentGateway;
use crate::api::dtos::requests::PaymentWebhookRequest;
use crate::api::dtos::responses::PaymentAckResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Gateway callback. Replaying the same notification leaves the reservation unchanged.
pub async fn payment_webhook(
    State(state): State<Arc<AppState>>,
    PaymentGateway(actor): PaymentGateway,
    Json(payload): Json<PaymentWebhookRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        reservation_id = %payload.reservation_id,
        "Payment notification: {}", payload.payment_status.as_str()
    );

    let reservation = state.reservation_service
        .update_payment_status(&actor, &payload.reservation_id, payload.payment_status)
        .await?;
    Ok(Json(PaymentAckResponse::from(reservation)))
}
