// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{MissionParameters, TimeRange};
pub use scenario::Scenario;
