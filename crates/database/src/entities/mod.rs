pub mod apartment_types;
pub mod reservations;
