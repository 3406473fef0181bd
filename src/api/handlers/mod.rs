pub mod health;
pub mod payment;
pub mod reservation;
pub mod reservation_management;
pub mod room;
