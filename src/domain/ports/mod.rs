use crate::domain::models::{
    reservation::{Reservation, ReservationFilter},
    room::{Room, RoomType, RoomWithType},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create_room_type(&self, room_type: &RoomType) -> Result<RoomType, AppError>;
    async fn list_room_types(&self) -> Result<Vec<RoomType>, AppError>;
    async fn find_room_type(&self, id: &str) -> Result<Option<RoomType>, AppError>;
    async fn create_room(&self, room: &Room) -> Result<Room, AppError>;
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError>;
    async fn set_room_active(&self, room_id: &str, is_active: bool) -> Result<Room, AppError>;
    async fn find_with_type(&self, room_id: &str) -> Result<Option<RoomWithType>, AppError>;
}

/// Reservation storage. `create` and `update` must reject a write that would
/// overlap another pending, confirmed or checked-in reservation of the same
/// room with `AppError::RoomUnavailable`, atomically with the write itself.
///
/// `update` writes `next` only while the stored row still carries the
/// `status`, `payment_status` and `updated_at` of `read`, and returns
/// `Ok(None)` when it does not (or the row is gone).
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Reservation>, AppError>;
    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>, AppError>;
    async fn update(&self, next: &Reservation, read: &Reservation) -> Result<Option<Reservation>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
