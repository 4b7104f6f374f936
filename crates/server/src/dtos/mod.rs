pub mod apartment_type;
pub mod reservation;
pub mod response;
pub mod system;
