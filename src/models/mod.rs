// src/models/mod.rs

pub mod position;
pub mod recognition;
pub mod vehicle;

pub use position::GeoPosition;
pub use vehicle::{Leg, Vehicle, VehicleStatus};
