use fxhash::FxHashMap;
use ignite_domain::metrics::{ErrorRecord, InitializationMetrics, PhaseTiming};
use parking_lot::RwLock;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::Instant;
use tracing::trace;

#[derive(Debug, Default)]
struct RecorderState {
    metrics: InitializationMetrics,
    started: Option<Instant>,
    // Monotonic start of every open phase; wall-clock values live in `metrics`.
    clocks: FxHashMap<String, Instant>,
}

/// Outcome of a phase run through [`MetricsRecorder::timed`].
#[derive(Debug)]
pub struct Timed<T> {
    pub result: Result<T, ErrorRecord>,
    pub duration: Option<Duration>,
}

/// Accumulates phase timings and errors of one run.
///
/// Clones share the same record. Durations use the Tokio clock, so paused-time
/// tests observe virtual time. The lock is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct MetricsRecorder {
    state: Arc<RwLock<RecorderState>>,
}

impl MetricsRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of the run. Only the first call has an effect.
    pub fn begin(&self) {
        let mut state = self.state.write();
        if state.started.is_none() {
            state.started = Some(Instant::now());
            state.metrics.start_time = Some(SystemTime::now());
        }
    }

    /// Opens `name`, replacing any earlier entry with the same name.
    pub fn start_phase(&self, name: &str) {
        let mut state = self.state.write();
        state.clocks.insert(name.to_owned(), Instant::now());
        state.metrics.phases.insert(name.to_owned(), PhaseTiming::started(SystemTime::now()));
        trace!(phase = name, "Phase opened");
    }

    /// Closes `name` and returns its duration; `None` if it was never started.
    pub fn end_phase(&self, name: &str) -> Option<Duration> {
        let mut state = self.state.write();
        let started = state.clocks.remove(name)?;
        let timing = state.metrics.phases.get_mut(name)?;
        let duration = started.elapsed();
        timing.end_time = Some(SystemTime::now());
        timing.duration = Some(duration);
        trace!(phase = name, duration_ms = duration.as_millis(), "Phase closed");
        Some(duration)
    }

    /// Appends an error; never changes the run status.
    pub fn record_error(&self, phase: &str, error: impl Display) -> ErrorRecord {
        let record = ErrorRecord::new(phase, error);
        self.state.write().metrics.errors.push(record.clone());
        record
    }

    /// Freezes `end_time` and `total_duration`; later calls return the frozen total.
    pub fn finish(&self) -> Duration {
        let mut state = self.state.write();
        if let Some(total) = state.metrics.total_duration {
            return total;
        }
        let total = state.started.map(|started| started.elapsed()).unwrap_or_default();
        state.metrics.end_time = Some(SystemTime::now());
        state.metrics.total_duration = Some(total);
        total
    }

    #[must_use]
    pub fn snapshot(&self) -> InitializationMetrics {
        self.state.read().metrics.clone()
    }

    /// Runs `work` bracketed by `start_phase`/`end_phase`, recording its error.
    pub async fn timed<F, T, E>(&self, name: &str, work: F) -> Timed<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.start_phase(name);
        let result = work.await.map_err(|err| self.record_error(name, err));
        let duration = self.end_phase(name);
        Timed { result, duration }
    }

    /// Like [`MetricsRecorder::timed`], keeping only the successful value.
    pub async fn measure<F, T, E>(&self, name: &str, work: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.timed(name, work).await.result.ok()
    }
}
