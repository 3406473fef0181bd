use crate::domain::models::reservation::{
    BoardType, NewReservation, PaymentStatus, ReservationPatch, ReservationStatus,
};
use crate::domain::models::room::Amenities;
use crate::error::{AppError, FieldError};
use chrono::NaiveDate;
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an optional `YYYY-MM-DD` field, recording a field error when it is malformed.
fn parse_date(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty())?;
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "Date must use the YYYY-MM-DD format"));
            None
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateReservationRequest {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_contact: String,
    pub room_id: String,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub total_guests: i32,
    pub board_type: BoardType,
    pub special_request: Option<String>,
}

impl TryFrom<CreateReservationRequest> for NewReservation {
    type Error = AppError;

    fn try_from(req: CreateReservationRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let check_in_date = parse_date("check_in_date", req.check_in_date.as_deref(), &mut errors);
        let check_out_date = parse_date("check_out_date", req.check_out_date.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(NewReservation {
            guest_name: req.guest_name,
            guest_email: req.guest_email,
            guest_contact: req.guest_contact,
            room_id: req.room_id,
            check_in_date,
            check_out_date,
            total_guests: req.total_guests,
            board_type: req.board_type,
            special_request: req.special_request,
        })
    }
}

#[derive(Deserialize, Default)]
pub struct UpdateReservationRequest {
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub total_guests: Option<i32>,
    pub board_type: Option<BoardType>,
    pub special_request: Option<String>,
}

impl TryFrom<UpdateReservationRequest> for ReservationPatch {
    type Error = AppError;

    fn try_from(req: UpdateReservationRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let check_in_date = parse_date("check_in_date", req.check_in_date.as_deref(), &mut errors);
        let check_out_date = parse_date("check_out_date", req.check_out_date.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(ReservationPatch {
            check_in_date,
            check_out_date,
            total_guests: req.total_guests,
            board_type: req.board_type,
            special_request: req.special_request,
        })
    }
}

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: ReservationStatus,
}

#[derive(Deserialize)]
pub struct ChangePaymentRequest {
    pub payment_status: PaymentStatus,
}

#[derive(Deserialize)]
pub struct PaymentWebhookRequest {
    pub reservation_id: String,
    pub payment_status: PaymentStatus,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<i32>,
    pub board_type: Option<String>,
}

impl AvailabilityQuery {
    pub fn stay(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        let mut errors = Vec::new();
        let check_in = parse_date("check_in", self.check_in.as_deref(), &mut errors);
        let check_out = parse_date("check_out", self.check_out.as_deref(), &mut errors);

        let malformed = |field: &str, errors: &[FieldError]| errors.iter().any(|e| e.field == field);
        if check_in.is_none() && !malformed("check_in", &errors) {
            errors.push(FieldError::new("check_in", "Check-in date is required"));
        }
        if check_out.is_none() && !malformed("check_out", &errors) {
            errors.push(FieldError::new("check_out", "Check-out date is required"));
        }

        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) if errors.is_empty() => Ok((check_in, check_out)),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    pub price_per_night: i64,
    pub bed_type: String,
    pub room_size: i32,
    pub view_type: String,
    #[serde(default)]
    pub amenities: Amenities,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_number: String,
    pub room_type_id: String,
    pub max_guests: i32,
}
