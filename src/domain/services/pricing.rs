use chrono::NaiveDate;

use crate::domain::models::reservation::BoardType;
use crate::error::AppError;

impl BoardType {
    /// Price multiplier in tenths, so that 1.2 stays exact.
    fn multiplier_tenths(&self) -> i64 {
        match self {
            BoardType::RoomOnly => 10,
            BoardType::BedAndBreakfast => 12,
            BoardType::FullBoard => 15,
        }
    }
}

pub fn compute_nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<i32, AppError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(AppError::InvalidDateRange);
    }
    i32::try_from(nights).map_err(|_| AppError::InvalidDateRange)
}

/// `round(nightly_rate * nights * multiplier * guests)`, half away from zero.
pub fn compute_price(nightly_rate: i64, nights: i32, board_type: BoardType, guests: i32) -> i64 {
    let scaled = nightly_rate
        .saturating_mul(i64::from(nights))
        .saturating_mul(i64::from(guests))
        .saturating_mul(board_type.multiplier_tenths());

    if scaled >= 0 {
        (scaled + 5) / 10
    } else {
        (scaled - 5) / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_nights_between_dates() {
        assert_eq!(compute_nights(date("2025-01-10"), date("2025-01-13")).unwrap(), 3);
        assert_eq!(compute_nights(date("2024-02-28"), date("2024-03-01")).unwrap(), 2);
    }

    #[test]
    fn test_nights_rejects_empty_or_inverted_range() {
        assert!(matches!(
            compute_nights(date("2025-01-10"), date("2025-01-10")),
            Err(AppError::InvalidDateRange)
        ));
        assert!(matches!(
            compute_nights(date("2025-01-10"), date("2025-01-09")),
            Err(AppError::InvalidDateRange)
        ));
    }

    #[test]
    fn test_price_applies_board_multiplier() {
        assert_eq!(compute_price(1000, 3, BoardType::BedAndBreakfast, 2), 7200);
        assert_eq!(compute_price(1000, 4, BoardType::RoomOnly, 2), 8000);
        assert_eq!(compute_price(1000, 1, BoardType::FullBoard, 1), 1500);
    }

    #[test]
    fn test_price_rounds_to_whole_units() {
        // 333 * 1.2 = 399.6
        assert_eq!(compute_price(333, 1, BoardType::BedAndBreakfast, 1), 400);
        // 3 * 1.5 = 4.5
        assert_eq!(compute_price(3, 1, BoardType::FullBoard, 1), 5);
        // 1 * 1.2 = 1.2
        assert_eq!(compute_price(1, 1, BoardType::BedAndBreakfast, 1), 1);
    }

    #[test]
    fn test_unknown_board_type_prices_as_room_only() {
        let board = BoardType::from("Half Board Deluxe");
        assert_eq!(compute_price(2500, 2, board, 1), 5000);
    }
}
