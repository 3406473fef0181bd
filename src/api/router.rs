use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, payment, reservation, reservation_management, room};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health::health_check))

        // Public Booking Flow
        .route("/api/v1/reservations", post(reservation::create_reservation))
        .route("/api/v1/rooms/{room_id}/availability", get(room::check_availability))

        // Guest Reservation Management
        .route("/api/v1/reservations/manage/{token}", get(reservation_management::get_reservation_by_token).put(reservation_management::update_reservation_by_token))
        .route("/api/v1/reservations/manage/{token}/cancel", patch(reservation_management::cancel_reservation_by_token))

        // Admin Reservations
        .route("/api/v1/admin/reservations", post(reservation::admin_create_reservation).get(reservation::list_reservations))
        .route("/api/v1/admin/reservations/{reservation_id}", get(reservation::get_reservation).put(reservation::update_reservation).delete(reservation::delete_reservation))
        .route("/api/v1/admin/reservations/{reservation_id}/cancel", patch(reservation::cancel_reservation))
        .route("/api/v1/admin/reservations/{reservation_id}/status", patch(reservation::change_status))
        .route("/api/v1/admin/reservations/{reservation_id}/payment", patch(reservation::change_payment))

        // Admin Catalogue
        .route("/api/v1/admin/room-types", post(room::create_room_type).get(room::list_room_types))
        .route("/api/v1/admin/rooms", post(room::create_room).get(room::list_rooms))
        .route("/api/v1/admin/rooms/{room_id}", patch(room::update_room))

        // Payment Gateway
        .route("/api/v1/payments/webhook", post(payment::payment_webhook))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        actor_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
