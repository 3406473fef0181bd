use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminActor;
use crate::api::dtos::requests::{
    ChangePaymentRequest, ChangeStatusRequest, CreateReservationRequest, UpdateReservationRequest,
};
use crate::domain::models::actor::Actor;
use crate::domain::models::reservation::{NewReservation, ReservationFilter, ReservationPatch};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Public booking form. The guest is identified by the email they booked with.
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewReservation::try_from(payload)?;
    let actor = Actor::guest(input.guest_email.trim());

    let reservation = state.reservation_service.create(&actor, input).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn admin_create_reservation(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewReservation::try_from(payload)?;
    let reservation = state.reservation_service.create(&actor, input).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    AdminActor(_): AdminActor,
    Query(filter): Query<ReservationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = state.reservation_service.list(&filter).await?;
    Ok(Json(reservations))
}

pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    AdminActor(_): AdminActor,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service.get(&reservation_id).await?;
    Ok(Json(reservation))
}

pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(reservation_id): Path<String>,
    Json(payload): Json<UpdateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let patch = ReservationPatch::try_from(payload)?;
    let reservation = state.reservation_service.update(&actor, &reservation_id, patch).await?;
    Ok(Json(reservation))
}

pub async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service.cancel(&actor, &reservation_id).await?;
    Ok(Json(reservation))
}

pub async fn change_status(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(reservation_id): Path<String>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service
        .transition_status(&actor, &reservation_id, payload.status)
        .await?;
    Ok(Json(reservation))
}

pub async fn change_payment(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(reservation_id): Path<String>,
    Json(payload): Json<ChangePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_service
        .update_payment_status(&actor, &reservation_id, payload.payment_status)
        .await?;
    Ok(Json(reservation))
}

pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_service.delete(&actor, &reservation_id).await?;
    info!("Reservation {} removed by {}", reservation_id, actor.id);
    Ok(StatusCode::NO_CONTENT)
}
