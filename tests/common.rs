use hotel_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::ports::Clock,
    infra::repositories::{
        sqlite_reservation_repo::SqliteReservationRepo,
        sqlite_room_repo::SqliteRoomRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::{json, Value};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const WEBHOOK_SECRET: &str = "test-webhook-secret";

/// Clock pinned to a date the tests control.
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(date: &str) -> Self {
        Self { now: RwLock::new(midday(date)) }
    }

    #[allow(dead_code)]
    pub fn set_today(&self, date: &str) {
        *self.now.write().unwrap() = midday(date);
    }

    #[allow(dead_code)]
    pub fn now_plus_seconds(&self, seconds: i64) -> DateTime<Utc> {
        *self.now.read().unwrap() + chrono::Duration::seconds(seconds)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

fn midday(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub clock: Arc<FixedClock>,
}

#[allow(dead_code)]
impl TestApp {
    /// Fresh database with "today" pinned to 2025-02-15.
    pub async fn new() -> Self {
        Self::with_today("2025-02-15").await
    }

    pub async fn with_today(today: &str) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_api_key: ADMIN_KEY.to_string(),
            payment_webhook_secret: WEBHOOK_SECRET.to_string(),
            log_dir: "./logs".to_string(),
        };

        let clock = Arc::new(FixedClock::at(today));

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteReservationRepo::new(pool.clone())),
            Arc::new(SqliteRoomRepo::new(pool.clone())),
            clock.clone(),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            clock,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(method, uri, body, &[]).await
    }

    pub async fn admin(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(method, uri, body, &[("X-Admin-Key", ADMIN_KEY), ("X-Actor-Id", "front-desk")]).await
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Creates a room type at `price_per_night` and one room of it; returns the room id.
    pub async fn seed_room(&self, room_number: &str, price_per_night: i64, max_guests: i32) -> String {
        let (status, room_type) = self.admin("POST", "/api/v1/admin/room-types", Some(json!({
            "name": format!("Type {}", room_number),
            "price_per_night": price_per_night,
            "bed_type": "Queen",
            "room_size": 24,
            "view_type": "Garden",
            "amenities": { "wifi": true },
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "room type: {room_type}");

        let (status, room) = self.admin("POST", "/api/v1/admin/rooms", Some(json!({
            "room_number": room_number,
            "room_type_id": room_type["id"],
            "max_guests": max_guests,
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "room: {room}");

        room["id"].as_str().unwrap().to_string()
    }

    pub async fn book(&self, room_id: &str, check_in: &str, check_out: &str, guests: i32) -> (StatusCode, Value) {
        self.request("POST", "/api/v1/reservations", Some(reservation_payload(room_id, check_in, check_out, guests))).await
    }
}

#[allow(dead_code)]
pub fn reservation_payload(room_id: &str, check_in: &str, check_out: &str, guests: i32) -> Value {
    json!({
        "guest_name": "Asha Shrestha",
        "guest_email": "asha@example.com",
        "guest_contact": "9812345678",
        "room_id": room_id,
        "check_in_date": check_in,
        "check_out_date": check_out,
        "total_guests": guests,
        "board_type": "room_only",
    })
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
