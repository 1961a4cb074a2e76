pub mod cli_controller;
pub mod job;
