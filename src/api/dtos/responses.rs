use crate::domain::models::reservation::{PaymentStatus, Reservation, ReservationStatus};
use chrono::{DateTime, Utc};
use crate::domain::models::room::{Amenities, Room, RoomType};
use serde::Serialize;

#[derive(Serialize)]
pub struct RoomTypeResponse {
    pub id: String,
    pub name: String,
    pub price_per_night: i64,
    pub bed_type: String,
    pub room_size: i32,
    pub view_type: String,
    pub amenities: Amenities,
    pub description: String,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(room_type: RoomType) -> Self {
        let amenities = room_type.amenities();
        Self {
            id: room_type.id,
            name: room_type.name,
            price_per_night: room_type.price_per_night,
            bed_type: room_type.bed_type,
            room_size: room_type.room_size,
            view_type: room_type.view_type,
            amenities,
            description: room_type.description,
        }
    }
}

/// What a guest sees when opening their management link.
#[derive(Serialize)]
pub struct ManagedReservationResponse {
    pub reservation: Reservation,
    pub room: Room,
    pub room_type: RoomTypeResponse,
}

/// Acknowledgement sent back to the payment gateway. Leaves out guest
/// details and the management token.
#[derive(Serialize)]
pub struct PaymentAckResponse {
    pub reservation_id: String,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for PaymentAckResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            reservation_id: reservation.id,
            status: reservation.status,
            payment_status: reservation.payment_status,
            updated_at: reservation.updated_at,
        }
    }
}
