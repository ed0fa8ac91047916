//! Infrastructure adapters and runtime bootstrap.

pub mod api;
pub mod telemetry;
