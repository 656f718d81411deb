pub mod config;
pub mod doctor;
pub mod points;
pub mod week;
