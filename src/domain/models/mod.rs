pub mod actor;
pub mod reservation;
pub mod room;
