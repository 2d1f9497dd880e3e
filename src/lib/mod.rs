//! Shared library modules providing the error type and telemetry initialization.

pub mod errors;
pub mod telemetry;
