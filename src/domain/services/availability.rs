use chrono::NaiveDate;
use crate::domain::models::reservation::{Reservation, ReservationStatus};

/// Whether `reservation` still holds its room as of `today`.
///
/// Cancelled stays never hold the room. A checked-out stay keeps holding it
/// only while its range has not fully elapsed.
pub fn blocks_room(reservation: &Reservation, today: NaiveDate) -> bool {
    match reservation.status {
        ReservationStatus::Cancelled => false,
        ReservationStatus::CheckedOut => reservation.check_out_date > today,
        _ => true,
    }
}

/// Half-open `[check_in, check_out)` overlap: a departure and an arrival on the
/// same day do not collide.
pub fn ranges_overlap(
    check_in: NaiveDate,
    check_out: NaiveDate,
    other_in: NaiveDate,
    other_out: NaiveDate,
) -> bool {
    check_in < other_out && check_out > other_in
}

pub fn find_conflicts<'a>(
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    existing: &'a [Reservation],
    exclude_reservation_id: Option<&str>,
    today: NaiveDate,
) -> Vec<&'a Reservation> {
    existing
        .iter()
        .filter(|r| r.room_id == room_id)
        .filter(|r| exclude_reservation_id != Some(r.id.as_str()))
        .filter(|r| blocks_room(r, today))
        .filter(|r| ranges_overlap(check_in, check_out, r.check_in_date, r.check_out_date))
        .collect()
}

pub fn is_available(
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    existing: &[Reservation],
    exclude_reservation_id: Option<&str>,
    today: NaiveDate,
) -> bool {
    find_conflicts(room_id, check_in, check_out, existing, exclude_reservation_id, today).is_empty()
}
