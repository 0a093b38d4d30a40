//! Data models for the zing probe

pub mod config;
pub mod sample;

pub use config::{AddressFamily, Config};
pub use sample::{CycleOutcome, Sample};
