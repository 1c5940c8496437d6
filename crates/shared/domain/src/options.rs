use crate::duration::millis;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for a whole initialization run unless overridden.
pub const DEFAULT_INITIALIZATION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// How hard the platform strategy is allowed to tune the runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationLevel {
    /// Skip every optional optimization phase.
    Minimal,
    #[default]
    Balanced,
    /// Trade fidelity for speed (prefetching, smaller caches, reduced motion).
    Aggressive,
}

/// Caller-supplied knobs for one initialization run.
///
/// Only the options of the first `initialize` call are honoured; later calls
/// join the run already in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInitializerOptions {
    pub preload_fonts: bool,
    pub preload_images: bool,
    pub preload_config: bool,
    #[serde(with = "millis")]
    pub initialization_timeout: Duration,
    pub track_performance: bool,
    /// Extra resources registered before the run starts.
    pub critical_resources: Vec<String>,
    pub optimization_level: OptimizationLevel,
}

impl Default for AppInitializerOptions {
    fn default() -> Self {
        Self {
            preload_fonts: true,
            preload_images: true,
            preload_config: true,
            initialization_timeout: DEFAULT_INITIALIZATION_TIMEOUT,
            track_performance: true,
            critical_resources: Vec::new(),
            optimization_level: OptimizationLevel::Balanced,
        }
    }
}

impl AppInitializerOptions {
    /// Options that skip every preload and tracking phase.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            preload_fonts: false,
            preload_images: false,
            preload_config: false,
            track_performance: false,
            optimization_level: OptimizationLevel::Minimal,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_fonts(mut self, enabled: bool) -> Self {
        self.preload_fonts = enabled;
        self
    }

    #[must_use]
    pub const fn with_images(mut self, enabled: bool) -> Self {
        self.preload_images = enabled;
        self
    }

    #[must_use]
    pub const fn with_config(mut self, enabled: bool) -> Self {
        self.preload_config = enabled;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.initialization_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_performance_tracking(mut self, enabled: bool) -> Self {
        self.track_performance = enabled;
        self
    }

    #[must_use]
    pub const fn with_optimization_level(mut self, level: OptimizationLevel) -> Self {
        self.optimization_level = level;
        self
    }

    #[must_use]
    pub fn with_critical_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.critical_resources.extend(resources.into_iter().map(Into::into));
        self
    }

    /// Whether the asset preloading phase has anything to do.
    #[must_use]
    pub const fn preloads_assets(&self) -> bool {
        self.preload_images || self.preload_config
    }

    #[must_use]
    pub fn optimizations_enabled(&self) -> bool {
        self.optimization_level != OptimizationLevel::Minimal
    }
}
