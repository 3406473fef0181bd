use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::actor::Actor;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{Span, warn};

pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";
pub const ACTOR_ID_HEADER: &str = "X-Actor-Id";

const DEFAULT_ADMIN_ID: &str = "admin";

/// Staff caller, authenticated by the shared admin key.
pub struct AdminActor(pub Actor);

impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let key = parts.headers.get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if key != app_state.config.admin_api_key {
            warn!("Rejected admin request with a wrong key");
            return Err(AppError::Unauthorized);
        }

        let actor_id = parts.headers.get(ACTOR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ADMIN_ID);

        Span::current().record("actor_id", actor_id);

        Ok(AdminActor(Actor::admin(actor_id)))
    }
}
