use crate::domain::{models::reservation::{Reservation, ReservationFilter}, ports::ReservationRepository};
use crate::error::AppError;
use crate::infra::repositories::map_write_error;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

pub struct PostgresReservationRepo {
    pool: PgPool,
}

impl PostgresReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepo {
    async fn create(&self, r: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (id, room_id, guest_name, guest_email, guest_contact, check_in_date, check_out_date, nights, total_guests, board_type, total_price, special_request, status, payment_status, added_by, added_with, management_token, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
             RETURNING *"
        )
            .bind(&r.id).bind(&r.room_id).bind(&r.guest_name).bind(&r.guest_email).bind(&r.guest_contact)
            .bind(r.check_in_date).bind(r.check_out_date).bind(r.nights).bind(r.total_guests)
            .bind(r.board_type.as_str()).bind(r.total_price).bind(&r.special_request)
            .bind(r.status.as_str()).bind(r.payment_status.as_str()).bind(&r.added_by).bind(r.added_with.as_str())
            .bind(&r.management_token).bind(r.created_at).bind(r.updated_at)
            .fetch_one(&self.pool).await.map_err(map_write_error)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_token(&self, token: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE management_token = $1").bind(token).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE room_id = $1 AND status != 'cancelled' ORDER BY check_in_date ASC").bind(room_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM reservations WHERE TRUE");
        if let Some(status) = filter.status {
            qb.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(room_id) = &filter.room_id {
            qb.push(" AND room_id = ").push_bind(room_id.clone());
        }
        if let Some(email) = &filter.guest_email {
            qb.push(" AND lower(guest_email) = lower(").push_bind(email.clone()).push(")");
        }
        qb.push(" ORDER BY check_in_date ASC, created_at ASC");

        qb.build_query_as::<Reservation>().fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, r: &Reservation, read: &Reservation) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET check_in_date=$1, check_out_date=$2, nights=$3, total_guests=$4, board_type=$5, total_price=$6, special_request=$7, status=$8, payment_status=$9, updated_at=$10
             WHERE id=$11 AND status=$12 AND payment_status=$13 AND updated_at=$14
             RETURNING *"
        )
            .bind(r.check_in_date).bind(r.check_out_date).bind(r.nights).bind(r.total_guests)
            .bind(r.board_type.as_str()).bind(r.total_price).bind(&r.special_request)
            .bind(r.status.as_str()).bind(r.payment_status.as_str()).bind(r.updated_at)
            .bind(&read.id).bind(read.status.as_str()).bind(read.payment_status.as_str()).bind(read.updated_at)
            .fetch_optional(&self.pool).await.map_err(map_write_error)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Reservation not found".into())); }
        Ok(())
    }
}
