use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};
use thiserror::Error;

use crate::domain::models::actor::{Actor, ActorKind};

#[derive(Error, Debug)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::CheckedOut | ReservationStatus::Cancelled)
    }
}

impl TryFrom<String> for ReservationStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "checked_in" => Ok(ReservationStatus::CheckedIn),
            "checked_out" => Ok(ReservationStatus::CheckedOut),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(UnknownVariant { kind: "reservation status", value }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "paid" => Ok(PaymentStatus::Paid),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(UnknownVariant { kind: "payment status", value }),
        }
    }
}

/// Meal plan booked with the room. Anything unrecognised is treated as room only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BoardType {
    #[default]
    RoomOnly,
    BedAndBreakfast,
    FullBoard,
}

impl BoardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardType::RoomOnly => "room_only",
            BoardType::BedAndBreakfast => "bed_and_breakfast",
            BoardType::FullBoard => "full_board",
        }
    }
}

impl From<&str> for BoardType {
    fn from(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '&')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "bedandbreakfast" | "bed&breakfast" | "bb" => BoardType::BedAndBreakfast,
            "fullboard" | "fb" => BoardType::FullBoard,
            _ => BoardType::RoomOnly,
        }
    }
}

impl From<String> for BoardType {
    fn from(value: String) -> Self {
        BoardType::from(value.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub room_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_contact: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i32,
    pub total_guests: i32,
    #[sqlx(try_from = "String")]
    pub board_type: BoardType,
    pub total_price: i64,
    pub special_request: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ReservationStatus,
    #[sqlx(try_from = "String")]
    pub payment_status: PaymentStatus,
    pub added_by: String,
    #[sqlx(try_from = "String")]
    pub added_with: ActorKind,
    pub management_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation input as received from any entry point, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct NewReservation {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_contact: String,
    pub room_id: String,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub total_guests: i32,
    pub board_type: BoardType,
    pub special_request: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub total_guests: Option<i32>,
    pub board_type: Option<BoardType>,
    pub special_request: Option<String>,
}

impl ReservationPatch {
    pub fn moves_check_in(&self, current: &Reservation) -> bool {
        self.check_in_date.is_some_and(|d| d != current.check_in_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub room_id: Option<String>,
    pub guest_email: Option<String>,
}

pub struct PricedStay {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i32,
    pub total_guests: i32,
    pub board_type: BoardType,
    pub total_price: i64,
}

impl Reservation {
    pub fn new(input: NewReservation, stay: PricedStay, actor: &Actor, now: DateTime<Utc>) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            room_id: input.room_id,
            guest_name: input.guest_name.trim().to_string(),
            guest_email: input.guest_email.trim().to_string(),
            guest_contact: input.guest_contact.trim().to_string(),
            check_in_date: stay.check_in_date,
            check_out_date: stay.check_out_date,
            nights: stay.nights,
            total_guests: stay.total_guests,
            board_type: stay.board_type,
            total_price: stay.total_price,
            special_request: input.special_request.filter(|s| !s.trim().is_empty()),
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            added_by: actor.id.clone(),
            added_with: actor.kind,
            management_token: token,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_stay(&mut self, stay: PricedStay) {
        self.check_in_date = stay.check_in_date;
        self.check_out_date = stay.check_out_date;
        self.nights = stay.nights;
        self.total_guests = stay.total_guests;
        self.board_type = stay.board_type;
        self.total_price = stay.total_price;
    }
}
