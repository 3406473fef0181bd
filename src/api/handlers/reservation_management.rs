use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateReservationRequest;
use crate::api::dtos::responses::ManagedReservationResponse;
use crate::domain::models::actor::Actor;
use crate::domain::models::reservation::ReservationPatch;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_reservation_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service.get_by_token(&token).await?;

    let room = state.room_repo.find_with_type(&reservation.room_id).await?
        .ok_or(AppError::Internal)?;

    Ok(Json(ManagedReservationResponse {
        reservation,
        room: room.room,
        room_type: room.room_type.into(),
    }))
}

pub async fn update_reservation_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(payload): Json<UpdateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service.get_by_token(&token).await?;
    let patch = ReservationPatch::try_from(payload)?;

    let actor = Actor::guest(&reservation.guest_email);
    let updated = state.reservation_service.update(&actor, &reservation.id, patch).await?;
    info!("Reservation updated via management token: {}", updated.id);

    Ok(Json(updated))
}

pub async fn cancel_reservation_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service.get_by_token(&token).await?;

    let actor = Actor::guest(&reservation.guest_email);
    let cancelled = state.reservation_service.cancel(&actor, &reservation.id).await?;
    info!("Reservation cancelled via management token: {}", cancelled.id);

    Ok(Json(cancelled))
}
