use crate::domain::{models::room::{Room, RoomType, RoomWithType}, ports::RoomRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRoomRepo {
    pool: PgPool,
}

impl PostgresRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepo {
    async fn create_room_type(&self, t: &RoomType) -> Result<RoomType, AppError> {
        sqlx::query_as::<_, RoomType>(
            "INSERT INTO room_types (id, name, price_per_night, bed_type, room_size, view_type, amenities_json, description, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *"
        )
            .bind(&t.id).bind(&t.name).bind(t.price_per_night).bind(&t.bed_type).bind(t.room_size)
            .bind(&t.view_type).bind(&t.amenities_json).bind(&t.description).bind(t.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_room_types(&self) -> Result<Vec<RoomType>, AppError> {
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types ORDER BY price_per_night ASC, name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_room_type(&self, id: &str) -> Result<Option<RoomType>, AppError> {
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn create_room(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (id, room_number, room_type_id, max_guests, is_active, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&room.id).bind(&room.room_number).bind(&room.room_type_id).bind(room.max_guests)
            .bind(room.is_active).bind(room.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_number ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn set_room_active(&self, room_id: &str, is_active: bool) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>("UPDATE rooms SET is_active = $1 WHERE id = $2 RETURNING *")
            .bind(is_active).bind(room_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Room not found".into()))
    }
    async fn find_with_type(&self, room_id: &str) -> Result<Option<RoomWithType>, AppError> {
        let Some(room) = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1").bind(room_id).fetch_optional(&self.pool).await.map_err(AppError::Database)? else {
            return Ok(None);
        };
        let room_type = self.find_room_type(&room.room_type_id).await?
            .ok_or_else(|| AppError::InternalWithMsg(format!("Room {} references a missing room type", room.id)))?;
        Ok(Some(RoomWithType { room, room_type }))
    }
}
