pub mod availability;
pub mod lifecycle;
pub mod pricing;
pub mod reservation_service;
pub mod validation;
