mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::TestApp;
use hotel_backend::{
    domain::{
        models::{
            actor::Actor,
            reservation::{PaymentStatus, Reservation, ReservationFilter, ReservationPatch, ReservationStatus},
        },
        ports::ReservationRepository,
        services::reservation_service::ReservationService,
    },
    error::AppError,
    infra::repositories::{sqlite_reservation_repo::SqliteReservationRepo, sqlite_room_repo::SqliteRoomRepo},
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Runs `sql` against the row right before every write, standing in for a
/// request that commits between the service's read and its write.
struct ChangedUnderneath {
    inner: SqliteReservationRepo,
    pool: SqlitePool,
    sql: &'static str,
}

#[async_trait]
impl ReservationRepository for ChangedUnderneath {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        self.inner.create(reservation).await
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        self.inner.find_by_id(id).await
    }
    async fn find_by_token(&self, token: &str) -> Result<Option<Reservation>, AppError> {
        self.inner.find_by_token(token).await
    }
    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Reservation>, AppError> {
        self.inner.list_by_room(room_id).await
    }
    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        self.inner.list(filter).await
    }
    async fn update(&self, next: &Reservation, read: &Reservation) -> Result<Option<Reservation>, AppError> {
        sqlx::query(self.sql).bind(&read.id).execute(&self.pool).await.map_err(AppError::Database)?;
        self.inner.update(next, read).await
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.inner.delete(id).await
    }
}

fn service_racing_with(app: &TestApp, sql: &'static str) -> ReservationService {
    ReservationService::new(
        Arc::new(ChangedUnderneath {
            inner: SqliteReservationRepo::new(app.pool.clone()),
            pool: app.pool.clone(),
            sql,
        }),
        Arc::new(SqliteRoomRepo::new(app.pool.clone())),
        app.clock.clone(),
    )
}

async fn reserve(app: &TestApp) -> String {
    let room_id = app.seed_room("101", 1000, 2).await;
    let (status, body) = app.book(&room_id, "2025-03-01", "2025-03-03", 1).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_outdated_copy_cannot_overwrite_a_cancellation() {
    let app = TestApp::new().await;
    let id = reserve(&app).await;

    let outdated = app.state.reservation_service.get(&id).await.unwrap();
    let (status, _) = app.admin("PATCH", &format!("/api/v1/admin/reservations/{}/cancel", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let mut next = outdated.clone();
    next.total_guests = 2;
    next.updated_at = app.clock.now_plus_seconds(60);

    let repo = SqliteReservationRepo::new(app.pool.clone());
    let written = repo.update(&next, &outdated).await.unwrap();
    assert!(written.is_none());

    let (_, body) = app.admin("GET", &format!("/api/v1/admin/reservations/{}", id), None).await;
    assert_eq!(body["status"], "cancelled");
    assert_eq!(body["total_guests"], 1);
}

#[tokio::test]
async fn test_guest_edit_racing_a_cancellation_reports_terminal_state() {
    let app = TestApp::new().await;
    let id = reserve(&app).await;
    let service = service_racing_with(&app, "UPDATE reservations SET status = 'cancelled' WHERE id = ?");

    let patch = ReservationPatch { total_guests: Some(2), ..Default::default() };
    let result = service.update(&Actor::guest("asha@example.com"), &id, patch).await;
    assert!(matches!(result, Err(AppError::TerminalStateViolation(_))), "{result:?}");

    let stored = app.state.reservation_service.get(&id).await.unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);
    assert_eq!(stored.total_guests, 1);
}

#[tokio::test]
async fn test_cancel_racing_a_payment_keeps_the_payment() {
    let app = TestApp::new().await;
    let id = reserve(&app).await;
    let service = service_racing_with(&app, "UPDATE reservations SET payment_status = 'paid' WHERE id = ?");

    let result = service.cancel(&Actor::guest("asha@example.com"), &id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))), "{result:?}");

    let stored = app.state.reservation_service.get(&id).await.unwrap();
    assert_eq!(stored.status, ReservationStatus::Pending);
    assert_eq!(stored.payment_status, PaymentStatus::Paid);

    // A fresh attempt sees the new state and goes through
    let cancelled = app.state.reservation_service.cancel(&Actor::guest("asha@example.com"), &id).await.unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(cancelled.payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn test_webhook_racing_a_cancellation_reports_terminal_state() {
    let app = TestApp::new().await;
    let id = reserve(&app).await;
    let service = service_racing_with(&app, "UPDATE reservations SET status = 'cancelled' WHERE id = ?");

    let result = service.update_payment_status(&Actor::admin("payment-gateway"), &id, PaymentStatus::Paid).await;
    assert!(matches!(result, Err(AppError::TerminalStateViolation(_))), "{result:?}");

    let stored = app.state.reservation_service.get(&id).await.unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);
    assert_eq!(stored.payment_status, PaymentStatus::Unpaid);
}
