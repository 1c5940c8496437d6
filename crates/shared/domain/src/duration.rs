//! Serde helpers for durations expressed as integer milliseconds.
//!
//! ```rust
//! use std::time::Duration;
//!
//! #[derive(serde::Deserialize)]
//! struct Timeouts {
//!     #[serde(with = "ignite_domain::duration::millis")]
//!     startup: Duration,
//! }
//! ```

pub mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    /// Serializes as whole milliseconds, saturating at `u64::MAX`.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    /// # Errors
    /// Fails when the input is not a non-negative integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
