use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::models::{
    actor::Actor,
    reservation::{
        BoardType, NewReservation, PaymentStatus, PricedStay, Reservation, ReservationFilter,
        ReservationPatch, ReservationStatus,
    },
    room::RoomWithType,
};
use crate::domain::ports::{Clock, ReservationRepository, RoomRepository};
use crate::domain::services::{
    availability::{find_conflicts, is_available},
    lifecycle,
    pricing::{compute_nights, compute_price},
    validation::{validate_capacity, validate_new_reservation, validate_room_open, validate_stay, StayCheck},
};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct AvailabilityQuote {
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub available: bool,
    pub nights: i32,
    pub total_guests: i32,
    pub board_type: BoardType,
    pub total_price: i64,
}

pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    rooms: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        rooms: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { reservations, rooms, clock }
    }

    pub async fn create(&self, actor: &Actor, mut input: NewReservation) -> Result<Reservation, AppError> {
        let today = self.clock.today();
        input.room_id = input.room_id.trim().to_string();

        let room = if input.room_id.is_empty() {
            None
        } else {
            Some(self.find_room(&input.room_id).await?)
        };

        let mut errors = validate_new_reservation(&input, today);
        if let Some(ref room) = room {
            errors.extend(validate_room_open(&room.room));
            errors.extend(validate_capacity(&room.room, input.total_guests));
        }

        let (Some(room), Some(check_in), Some(check_out)) = (room, input.check_in_date, input.check_out_date) else {
            return Err(AppError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        self.ensure_available(&room.room.id, check_in, check_out, None).await?;
        let stay = price_stay(&room, check_in, check_out, input.total_guests, input.board_type)?;

        let reservation = Reservation::new(input, stay, actor, self.clock.now());
        let created = self.reservations.create(&reservation).await?;

        info!(
            reservation_id = %created.id,
            room_id = %created.room_id,
            actor = actor.kind.as_str(),
            "Reservation created for {} -> {} ({} nights, total {})",
            created.check_in_date, created.check_out_date, created.nights, created.total_price
        );
        Ok(created)
    }

    pub async fn update(&self, actor: &Actor, reservation_id: &str, patch: ReservationPatch) -> Result<Reservation, AppError> {
        let read = self.get(reservation_id).await?;
        let mut reservation = read.clone();
        lifecycle::ensure_editable(actor, reservation.status)?;

        let room = self.find_room(&reservation.room_id).await?;
        let check_in = patch.check_in_date.unwrap_or(reservation.check_in_date);
        let check_out = patch.check_out_date.unwrap_or(reservation.check_out_date);
        let total_guests = patch.total_guests.unwrap_or(reservation.total_guests);
        let board_type = patch.board_type.unwrap_or(reservation.board_type);

        let mut errors = validate_stay(
            &StayCheck {
                check_in_date: Some(check_in),
                check_out_date: Some(check_out),
                total_guests,
                reject_past_check_in: !actor.is_admin() || patch.moves_check_in(&reservation),
            },
            self.clock.today(),
        );
        errors.extend(validate_capacity(&room.room, total_guests));
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        self.ensure_available(&reservation.room_id, check_in, check_out, Some(&reservation.id)).await?;
        reservation.apply_stay(price_stay(&room, check_in, check_out, total_guests, board_type)?);

        if let Some(request) = patch.special_request {
            reservation.special_request = Some(request).filter(|s| !s.trim().is_empty());
        }
        reservation.updated_at = self.clock.now();

        let updated = self.save(&read, &reservation).await?;
        info!(reservation_id = %updated.id, actor = actor.kind.as_str(), "Reservation updated");
        Ok(updated)
    }

    /// Cancels without touching the payment status; refunds are a separate admin step.
    pub async fn cancel(&self, actor: &Actor, reservation_id: &str) -> Result<Reservation, AppError> {
        let read = self.get(reservation_id).await?;
        let mut reservation = read.clone();
        lifecycle::ensure_status_transition(actor, reservation.status, ReservationStatus::Cancelled)?;

        reservation.status = ReservationStatus::Cancelled;
        reservation.updated_at = self.clock.now();
        let cancelled = self.save(&read, &reservation).await?;

        if cancelled.payment_status == PaymentStatus::Paid {
            warn!(reservation_id = %cancelled.id, "Paid reservation cancelled; refund is still outstanding");
        }
        info!(reservation_id = %cancelled.id, actor = actor.kind.as_str(), "Reservation cancelled");
        Ok(cancelled)
    }

    pub async fn transition_status(
        &self,
        actor: &Actor,
        reservation_id: &str,
        new_status: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        if !actor.is_admin() {
            return Err(AppError::ForbiddenTransition("Only staff can change reservation status".into()));
        }

        let read = self.get(reservation_id).await?;
        let mut reservation = read.clone();
        lifecycle::ensure_status_transition(actor, reservation.status, new_status)?;

        if new_status == ReservationStatus::CheckedIn && self.clock.today() < reservation.check_in_date {
            return Err(AppError::ForbiddenTransition(format!(
                "Cannot check in before {}", reservation.check_in_date
            )));
        }

        let previous = reservation.status;
        reservation.status = new_status;
        reservation.updated_at = self.clock.now();
        let updated = self.save(&read, &reservation).await?;

        info!(
            reservation_id = %updated.id,
            actor_id = %actor.id,
            "Reservation status {} -> {}", previous.as_str(), new_status.as_str()
        );
        Ok(updated)
    }

    pub async fn update_payment_status(
        &self,
        actor: &Actor,
        reservation_id: &str,
        new_status: PaymentStatus,
    ) -> Result<Reservation, AppError> {
        let read = self.get(reservation_id).await?;
        if !lifecycle::ensure_payment_transition(actor, read.payment_status, new_status)? {
            return Ok(read);
        }

        let mut reservation = read.clone();

        let previous = reservation.payment_status;
        reservation.payment_status = new_status;
        reservation.updated_at = self.clock.now();
        let updated = self.save(&read, &reservation).await?;

        info!(
            reservation_id = %updated.id,
            actor_id = %actor.id,
            "Payment status {} -> {}", previous.as_str(), new_status.as_str()
        );
        Ok(updated)
    }

    pub async fn quote(
        &self,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_guests: i32,
        board_type: BoardType,
    ) -> Result<AvailabilityQuote, AppError> {
        let room = self.find_room(room_id).await?;
        let today = self.clock.today();

        let mut errors = validate_stay(
            &StayCheck {
                check_in_date: Some(check_in),
                check_out_date: Some(check_out),
                total_guests,
                reject_past_check_in: true,
            },
            today,
        );
        errors.extend(validate_capacity(&room.room, total_guests));
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let existing = self.reservations.list_by_room(room_id).await?;
        let available = room.room.is_active && is_available(room_id, check_in, check_out, &existing, None, today);
        let stay = price_stay(&room, check_in, check_out, total_guests, board_type)?;

        Ok(AvailabilityQuote {
            room_id: room.room.id,
            check_in_date: check_in,
            check_out_date: check_out,
            available,
            nights: stay.nights,
            total_guests,
            board_type,
            total_price: stay.total_price,
        })
    }

    pub async fn get(&self, reservation_id: &str) -> Result<Reservation, AppError> {
        self.reservations.find_by_id(reservation_id).await?
            .ok_or(AppError::NotFound("Reservation not found".into()))
    }

    pub async fn get_by_token(&self, token: &str) -> Result<Reservation, AppError> {
        self.reservations.find_by_token(token).await?
            .ok_or(AppError::NotFound("Reservation not found".into()))
    }

    pub async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        self.reservations.list(filter).await
    }

    pub async fn delete(&self, actor: &Actor, reservation_id: &str) -> Result<(), AppError> {
        if !actor.is_admin() {
            return Err(AppError::ForbiddenTransition("Only staff can delete reservations".into()));
        }
        self.reservations.delete(reservation_id).await?;
        info!(reservation_id = %reservation_id, actor_id = %actor.id, "Reservation deleted");
        Ok(())
    }

    /// Writes `next` only if the stored row still matches `read`; a concurrent
    /// change in between surfaces as a terminal-state violation or a conflict.
    async fn save(&self, read: &Reservation, next: &Reservation) -> Result<Reservation, AppError> {
        if let Some(saved) = self.reservations.update(next, read).await? {
            return Ok(saved);
        }

        let current = self.get(&read.id).await?;
        warn!(
            reservation_id = %read.id,
            "Stale write rejected: read {}/{}, now {}/{}",
            read.status.as_str(), read.payment_status.as_str(),
            current.status.as_str(), current.payment_status.as_str()
        );
        lifecycle::ensure_not_terminal(current.status)?;
        Err(AppError::Conflict("Reservation was changed by another request, reload and try again".into()))
    }

    async fn find_room(&self, room_id: &str) -> Result<RoomWithType, AppError> {
        self.rooms.find_with_type(room_id).await?
            .ok_or(AppError::NotFound("Room not found".into()))
    }

    async fn ensure_available(
        &self,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_reservation_id: Option<&str>,
    ) -> Result<(), AppError> {
        let existing = self.reservations.list_by_room(room_id).await?;
        let conflicts = find_conflicts(room_id, check_in, check_out, &existing, exclude_reservation_id, self.clock.today());

        if !conflicts.is_empty() {
            let ids: Vec<&str> = conflicts.iter().map(|r| r.id.as_str()).collect();
            warn!(room_id = %room_id, conflicts = ?ids, "Rejected {} -> {}: dates already taken", check_in, check_out);
            return Err(AppError::RoomUnavailable("Room is already booked for the selected dates".into()));
        }
        Ok(())
    }
}

fn price_stay(
    room: &RoomWithType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_guests: i32,
    board_type: BoardType,
) -> Result<PricedStay, AppError> {
    let nights = compute_nights(check_in, check_out)?;
    Ok(PricedStay {
        check_in_date: check_in,
        check_out_date: check_out,
        nights,
        total_guests,
        board_type,
        total_price: compute_price(room.room_type.price_per_night, nights, board_type, total_guests),
    })
}
