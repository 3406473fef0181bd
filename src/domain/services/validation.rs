use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

use crate::domain::models::reservation::NewReservation;
use crate::domain::models::room::Room;
use crate::error::FieldError;

// Mobile: 97/98 followed by 8 digits. Landline: 01 followed by 7 digits.
static CONTACT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:97|98)[0-9]{8}|01[0-9]{7})$").expect("contact pattern is valid")
});

pub fn is_valid_contact(contact: &str) -> bool {
    CONTACT_PATTERN.is_match(contact.trim())
}

pub fn is_valid_email(email: &str) -> bool {
    email.trim().validate_email()
}

pub struct StayCheck {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub total_guests: i32,
    pub reject_past_check_in: bool,
}

pub fn validate_stay(stay: &StayCheck, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match stay.check_in_date {
        None => errors.push(FieldError::new("check_in_date", "Check-in date is required")),
        Some(check_in) if stay.reject_past_check_in && check_in < today => {
            errors.push(FieldError::new("check_in_date", "Check-in date cannot be in the past"));
        }
        Some(_) => {}
    }

    match (stay.check_in_date, stay.check_out_date) {
        (_, None) => errors.push(FieldError::new("check_out_date", "Check-out date is required")),
        (Some(check_in), Some(check_out)) if check_out <= check_in => {
            errors.push(FieldError::new("check_out_date", "Check-out date must be after check-in date"));
        }
        _ => {}
    }

    if stay.total_guests < 1 {
        errors.push(FieldError::new("total_guests", "At least one guest is required"));
    }

    errors
}

pub fn validate_new_reservation(input: &NewReservation, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if input.guest_name.trim().is_empty() {
        errors.push(FieldError::new("guest_name", "Guest name is required"));
    }

    if input.guest_email.trim().is_empty() {
        errors.push(FieldError::new("guest_email", "Email is required"));
    } else if !is_valid_email(&input.guest_email) {
        errors.push(FieldError::new("guest_email", "Email address is invalid"));
    }

    if input.guest_contact.trim().is_empty() {
        errors.push(FieldError::new("guest_contact", "Contact number is required"));
    } else if !is_valid_contact(&input.guest_contact) {
        errors.push(FieldError::new(
            "guest_contact",
            "Contact must be a mobile (97/98 + 8 digits) or landline (01 + 7 digits) number",
        ));
    }

    if input.room_id.trim().is_empty() {
        errors.push(FieldError::new("room_id", "Room is required"));
    }

    errors.extend(validate_stay(
        &StayCheck {
            check_in_date: input.check_in_date,
            check_out_date: input.check_out_date,
            total_guests: input.total_guests,
            reject_past_check_in: true,
        },
        today,
    ));

    errors
}

pub fn validate_room_open(room: &Room) -> Vec<FieldError> {
    if room.is_active {
        Vec::new()
    } else {
        vec![FieldError::new("room_id", "Room is not open for reservations")]
    }
}

pub fn validate_capacity(room: &Room, total_guests: i32) -> Vec<FieldError> {
    if total_guests > room.max_guests {
        vec![FieldError::new(
            "total_guests",
            format!("Room {} accommodates at most {} guests", room.room_number, room.max_guests),
        )]
    } else {
        Vec::new()
    }
}
