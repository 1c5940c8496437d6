use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

/// Wall-clock bounds of one named phase.
///
/// `end_time` and `duration` stay `None` while the phase runs, or forever if the
/// run finished while the phase was still in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    pub start_time: SystemTime,
    pub end_time: Option<SystemTime>,
    pub duration: Option<Duration>,
}

impl PhaseTiming {
    #[must_use]
    pub const fn started(at: SystemTime) -> Self {
        Self { start_time: at, end_time: None, duration: None }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.duration.is_some()
    }
}

/// A failure observed during startup; never aborts the run on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub phase: String,
    pub error: String,
    pub timestamp: SystemTime,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(phase: impl Into<String>, error: impl ToString) -> Self {
        Self { phase: phase.into(), error: error.to_string(), timestamp: SystemTime::now() }
    }
}

/// Snapshot of everything measured during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializationMetrics {
    pub start_time: Option<SystemTime>,
    pub end_time: Option<SystemTime>,
    pub total_duration: Option<Duration>,
    pub phases: BTreeMap<String, PhaseTiming>,
    pub errors: Vec<ErrorRecord>,
}

impl InitializationMetrics {
    #[must_use]
    pub fn phase(&self, name: &str) -> Option<&PhaseTiming> {
        self.phases.get(name)
    }

    #[must_use]
    pub fn is_phase_complete(&self, name: &str) -> bool {
        self.phase(name).is_some_and(PhaseTiming::is_complete)
    }

    /// Phases that were started but never ended.
    #[must_use]
    pub fn interrupted_phases(&self) -> Vec<&str> {
        self.phases
            .iter()
            .filter(|(_, timing)| !timing.is_complete())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn errors_for<'a>(&'a self, phase: &'a str) -> impl Iterator<Item = &'a ErrorRecord> {
        self.errors.iter().filter(move |record| record.phase == phase)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}
