use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminActor;
use crate::api::dtos::requests::{AvailabilityQuery, CreateRoomRequest, CreateRoomTypeRequest, UpdateRoomRequest};
use crate::api::dtos::responses::RoomTypeResponse;
use crate::domain::models::reservation::BoardType;
use crate::domain::models::room::{NewRoomTypeParams, Room, RoomType};
use crate::error::{AppError, FieldError};
use std::sync::Arc;
use tracing::info;

pub async fn create_room_type(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Json(payload): Json<CreateRoomTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if payload.price_per_night < 0 {
        errors.push(FieldError::new("price_per_night", "Price cannot be negative"));
    }
    if payload.room_size < 1 {
        errors.push(FieldError::new("room_size", "Room size must be positive"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let room_type = RoomType::new(NewRoomTypeParams {
        name: payload.name.trim().to_string(),
        price_per_night: payload.price_per_night,
        bed_type: payload.bed_type,
        room_size: payload.room_size,
        view_type: payload.view_type,
        amenities: payload.amenities,
        description: payload.description.unwrap_or_default(),
    });

    let created = state.room_repo.create_room_type(&room_type).await?;
    info!(actor_id = %actor.id, "Room type {} created at {} per night", created.name, created.price_per_night);

    Ok((StatusCode::CREATED, Json(RoomTypeResponse::from(created))))
}

pub async fn list_room_types(
    State(state): State<Arc<AppState>>,
    AdminActor(_): AdminActor,
) -> Result<impl IntoResponse, AppError> {
    let room_types = state.room_repo.list_room_types().await?;
    Ok(Json(room_types.into_iter().map(RoomTypeResponse::from).collect::<Vec<_>>()))
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = Vec::new();
    if payload.room_number.trim().is_empty() {
        errors.push(FieldError::new("room_number", "Room number is required"));
    }
    if payload.max_guests < 1 {
        errors.push(FieldError::new("max_guests", "A room must fit at least one guest"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    state.room_repo.find_room_type(&payload.room_type_id).await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;

    let room = Room::new(payload.room_number.trim().to_string(), payload.room_type_id, payload.max_guests);
    let created = state.room_repo.create_room(&room).await?;
    info!(actor_id = %actor.id, "Room {} created", created.room_number);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Opens or closes a room for new reservations. Existing stays are untouched.
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    AdminActor(actor): AdminActor,
    Path(room_id): Path<String>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.set_room_active(&room_id, payload.is_active).await?;
    info!(actor_id = %actor.id, "Room {} is_active = {}", room.room_number, room.is_active);
    Ok(Json(room))
}

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    AdminActor(_): AdminActor,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list_rooms().await?;
    Ok(Json(rooms))
}

pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (check_in, check_out) = query.stay()?;
    let board_type = query.board_type.as_deref().map(BoardType::from).unwrap_or_default();

    let quote = state.reservation_service
        .quote(&room_id, check_in, check_out, query.guests.unwrap_or(1), board_type)
        .await?;
    Ok(Json(quote))
}
