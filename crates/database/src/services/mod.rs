pub mod apartment_type;
pub mod reservation;
