pub mod apartment_type;
pub mod reservation;
pub mod reservation_status;
pub mod validation;
