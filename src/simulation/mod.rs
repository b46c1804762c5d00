// src/simulation/mod.rs

pub mod clock;
pub mod context;
pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;
