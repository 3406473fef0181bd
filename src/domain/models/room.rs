use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Amenities {
    pub wifi: bool,
    pub air_conditioning: bool,
    pub television: bool,
    pub mini_bar: bool,
    pub balcony: bool,
    pub room_service: bool,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub price_per_night: i64,
    pub bed_type: String,
    pub room_size: i32,
    pub view_type: String,
    #[serde(skip_serializing)]
    pub amenities_json: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewRoomTypeParams {
    pub name: String,
    pub price_per_night: i64,
    pub bed_type: String,
    pub room_size: i32,
    pub view_type: String,
    pub amenities: Amenities,
    pub description: String,
}

impl RoomType {
    pub fn new(params: NewRoomTypeParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            price_per_night: params.price_per_night,
            bed_type: params.bed_type,
            room_size: params.room_size,
            view_type: params.view_type,
            amenities_json: serde_json::to_string(&params.amenities).unwrap_or_else(|_| "{}".to_string()),
            description: params.description,
            created_at: Utc::now(),
        }
    }

    pub fn amenities(&self) -> Amenities {
        serde_json::from_str(&self.amenities_json).unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub room_type_id: String,
    pub max_guests: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(room_number: String, room_type_id: String, max_guests: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_number,
            room_type_id,
            max_guests,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoomWithType {
    pub room: Room,
    pub room_type: RoomType,
}
