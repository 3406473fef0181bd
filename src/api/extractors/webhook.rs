use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::actor::Actor;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{Span, warn};

pub const WEBHOOK_SECRET_HEADER: &str = "X-Webhook-Secret";

const GATEWAY_ACTOR_ID: &str = "payment-gateway";

/// The payment gateway calling back. It acts with staff rights on payment status only.
pub struct PaymentGateway(pub Actor);

impl<S> FromRequestParts<S> for PaymentGateway
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let secret = parts.headers.get(WEBHOOK_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if secret != app_state.config.payment_webhook_secret {
            warn!("Rejected payment webhook with a wrong secret");
            return Err(AppError::Unauthorized);
        }

        Span::current().record("actor_id", GATEWAY_ACTOR_ID);

        Ok(PaymentGateway(Actor::admin(GATEWAY_ACTOR_ID)))
    }
}
