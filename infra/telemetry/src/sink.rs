use ignite_domain::metrics::ErrorRecord;
use ignite_domain::telemetry::PerformanceMetric;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{info, warn};

/// Anything the initializer reports to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    Metric(PerformanceMetric),
    Error(ErrorRecord),
}

/// Destination for startup metrics.
///
/// Implementations are called inline from startup phases, so they must return
/// quickly and must not panic.
pub trait TelemetrySink: Debug + Send + Sync {
    fn record_metric(&self, metric: PerformanceMetric);

    /// Hook for errors that were recorded but did not abort startup.
    fn record_error(&self, _record: &ErrorRecord) {}
}

pub type SharedSink = Arc<dyn TelemetrySink>;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn record_metric(&self, _metric: PerformanceMetric) {}
}

/// Emits every metric and error as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn record_metric(&self, metric: PerformanceMetric) {
        info!(
            target: "ignite::telemetry",
            name = %metric.name,
            kind = ?metric.kind,
            duration_ms = metric.duration.as_secs_f64() * 1000.0,
            component = %metric.component,
            "Performance metric"
        );
    }

    fn record_error(&self, record: &ErrorRecord) {
        warn!(
            target: "ignite::telemetry",
            phase = %record.phase,
            error = %record.error,
            "Startup error recorded"
        );
    }
}

/// Forwards every call to each inner sink, in order.
#[derive(Debug, Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<SharedSink>,
}

impl FanoutSink {
    #[must_use]
    pub fn new(sinks: impl IntoIterator<Item = SharedSink>) -> Self {
        Self { sinks: sinks.into_iter().collect() }
    }

    #[must_use = "The sink is consumed and returned with the extra target"]
    pub fn with(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl TelemetrySink for FanoutSink {
    fn record_metric(&self, metric: PerformanceMetric) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.record_metric(metric.clone());
            }
            last.record_metric(metric);
        }
    }

    fn record_error(&self, record: &ErrorRecord) {
        for sink in &self.sinks {
            sink.record_error(record);
        }
    }
}
