//! # Domain Models
//!
//! Pure startup types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no async, no clocks beyond `std::time` value types.

pub mod asset;
pub mod config;
pub mod constants;
pub mod duration;
pub mod flags;
pub mod metrics;
pub mod options;
pub mod platform;
pub mod signals;
pub mod status;
pub mod telemetry;
