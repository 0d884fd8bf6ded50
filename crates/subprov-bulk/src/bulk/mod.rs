pub mod config;
pub mod dump;
pub mod progress;
pub mod telemetry;
