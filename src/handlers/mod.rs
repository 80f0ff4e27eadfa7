pub mod reservations;
pub mod uploads;
pub mod vehicles;
