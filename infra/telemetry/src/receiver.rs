use crate::sink::TelemetryEvent;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Lag-tolerant receive for telemetry subscribers.
pub trait TelemetryReceiverExt {
    /// Receive the next event, returning `None` when the sink is gone.
    ///
    /// A lagging receiver skips to the oldest retained event instead of failing.
    fn next_event(&mut self) -> impl Future<Output = Option<Arc<TelemetryEvent>>> + Send;
}

impl TelemetryReceiverExt for broadcast::Receiver<Arc<TelemetryEvent>> {
    async fn next_event(&mut self) -> Option<Arc<TelemetryEvent>> {
        let mut skipped = 0u64;

        loop {
            match self.recv().await {
                Ok(event) => {
                    if skipped > 0 {
                        warn!(skipped, "Telemetry receiver lagged; continuing from latest event");
                    }
                    return Some(event);
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(skipped = n, total_skipped = skipped, "Telemetry receiver lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
