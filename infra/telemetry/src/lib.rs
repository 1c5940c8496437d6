//! # Telemetry
//!
//! Destinations for the measurements taken while an application starts.
//!
//! ## Overview
//!
//! Every initializer reports through one [`TelemetrySink`]. A sink receives
//! [`PerformanceMetric`]s (per phase, per run, web vitals) and the
//! [`ErrorRecord`]s of failures that were logged and swallowed instead of
//! aborting startup. Sinks are synchronous and must never block: they are
//! called from inside startup phases.
//!
//! ## Sinks
//!
//! * [`TracingSink`]: structured `tracing` events (the default).
//! * [`BroadcastSink`]: fan-out over a `tokio` broadcast channel for live dashboards.
//! * [`MemorySink`]: keeps everything in memory; handy for tests and snapshots.
//! * [`FanoutSink`]: forwards to several sinks.
//! * [`NoopSink`]: drops everything.
//!
//! # Example
//!
//! ```rust
//! use ignite_domain::telemetry::PerformanceMetric;
//! use ignite_telemetry::{BroadcastSink, TelemetryEvent, TelemetryReceiverExt, TelemetrySink};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sink = BroadcastSink::new();
//!     let mut rx = sink.subscribe();
//!
//!     sink.record_metric(PerformanceMetric::phase("load_fonts", Duration::from_millis(12)));
//!
//!     if let Some(event) = rx.next_event().await {
//!         assert!(matches!(&*event, TelemetryEvent::Metric(m) if m.name == "load_fonts"));
//!     }
//! }
//! ```

mod broadcast;
mod error;
mod memory;
mod receiver;
mod sink;

pub use broadcast::BroadcastSink;
pub use error::{TelemetryError, TelemetryErrorExt};
pub use ignite_domain::metrics::ErrorRecord;
pub use ignite_domain::telemetry::{MetricKind, PerformanceMetric};
pub use memory::MemorySink;
pub use receiver::TelemetryReceiverExt;
pub use sink::{FanoutSink, NoopSink, SharedSink, TelemetryEvent, TelemetrySink, TracingSink};
