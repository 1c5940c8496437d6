use crate::sink::{TelemetryEvent, TelemetrySink};
use ignite_domain::metrics::ErrorRecord;
use ignite_domain::telemetry::PerformanceMetric;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every event in arrival order. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn metrics(&self) -> Vec<PerformanceMetric> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                TelemetryEvent::Metric(metric) => Some(metric.clone()),
                TelemetryEvent::Error(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                TelemetryEvent::Error(record) => Some(record.clone()),
                TelemetryEvent::Metric(_) => None,
            })
            .collect()
    }

    /// Metrics recorded under `name`.
    #[must_use]
    pub fn metrics_named(&self, name: &str) -> Vec<PerformanceMetric> {
        self.metrics().into_iter().filter(|metric| metric.name == name).collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl TelemetrySink for MemorySink {
    fn record_metric(&self, metric: PerformanceMetric) {
        self.events.lock().push(TelemetryEvent::Metric(metric));
    }

    fn record_error(&self, record: &ErrorRecord) {
        self.events.lock().push(TelemetryEvent::Error(record.clone()));
    }
}
