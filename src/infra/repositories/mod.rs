pub mod sqlite_reservation_repo;
pub mod sqlite_room_repo;

pub mod postgres_reservation_repo;
pub mod postgres_room_repo;

use crate::error::AppError;

// 23P01 = PostgreSQL exclusion_violation (reservations_no_overlap)
const PG_EXCLUSION_VIOLATION: &str = "23P01";
// Raised by the SQLite overlap triggers
const SQLITE_OVERLAP_MESSAGE: &str = "reservation_overlap";

/// Maps a write failure caused by the room overlap constraint to
/// `RoomUnavailable`, so a lost race looks the same as a failed pre-check.
pub(crate) fn map_write_error(err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        let is_overlap = db_err.code().as_deref() == Some(PG_EXCLUSION_VIOLATION)
            || db_err.message().contains(SQLITE_OVERLAP_MESSAGE);

        if is_overlap {
            return AppError::RoomUnavailable("Room is already booked for the selected dates".into());
        }
    }
    AppError::Database(err)
}
