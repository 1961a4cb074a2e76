pub mod algorithm;
pub mod attractor;
pub mod errors;
pub mod julia_config;
