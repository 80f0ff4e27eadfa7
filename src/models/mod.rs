pub mod reservations;
pub mod vehicles;
