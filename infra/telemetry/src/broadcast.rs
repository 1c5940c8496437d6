use crate::error::TelemetryError;
use crate::sink::{TelemetryEvent, TelemetrySink};
use ignite_domain::metrics::ErrorRecord;
use ignite_domain::telemetry::PerformanceMetric;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

/// 128 covers one full run (phases, vitals, errors) with room to spare.
const DEFAULT_CAPACITY: usize = 128;

/// Publishes telemetry to any number of live subscribers.
///
/// Events published while nobody listens are dropped; slow subscribers skip
/// ahead instead of blocking startup.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<Arc<TelemetryEvent>>,
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadcastSink {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self { sender }
    }

    /// # Errors
    /// Returns [`TelemetryError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, TelemetryError> {
        if capacity == 0 {
            return Err(TelemetryError::InvalidCapacity {
                message: "capacity must be greater than zero".into(),
                context: Some("BroadcastSink".into()),
            });
        }
        let (sender, _) = broadcast::channel(capacity);
        Ok(Self { sender })
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<TelemetryEvent>> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn publish(&self, event: TelemetryEvent) {
        match self.sender.send(Arc::new(event)) {
            Ok(count) => trace!(count, "Telemetry event dispatched"),
            Err(_) => trace!("Telemetry event dropped: no active subscribers"),
        }
    }
}

impl TelemetrySink for BroadcastSink {
    fn record_metric(&self, metric: PerformanceMetric) {
        self.publish(TelemetryEvent::Metric(metric));
    }

    fn record_error(&self, record: &ErrorRecord) {
        self.publish(TelemetryEvent::Error(record.clone()));
    }
}
