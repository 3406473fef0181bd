use std::sync::Arc;
use crate::domain::ports::{Clock, ReservationRepository, RoomRepository};
use crate::domain::services::reservation_service::ReservationService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub room_repo: Arc<dyn RoomRepository>,
    pub clock: Arc<dyn Clock>,
    pub reservation_service: Arc<ReservationService>,
}

impl AppState {
    pub fn new(
        config: Config,
        reservation_repo: Arc<dyn ReservationRepository>,
        room_repo: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let reservation_service = Arc::new(ReservationService::new(
            reservation_repo,
            room_repo.clone(),
            clock.clone(),
        ));

        Self { config, room_repo, clock, reservation_service }
    }
}
