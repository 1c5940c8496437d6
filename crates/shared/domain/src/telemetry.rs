use crate::constants::COMPONENT_APP_INITIALIZER;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// The whole run.
    Initialization,
    Phase,
    WebVital,
    Custom,
}

/// Core Web Vitals observed on the web platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebVital {
    Lcp,
    Fid,
    Cls,
    Ttfb,
    Fcp,
}

impl WebVital {
    pub const ALL: [Self; 5] = [Self::Lcp, Self::Fid, Self::Cls, Self::Ttfb, Self::Fcp];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lcp => "LCP",
            Self::Fid => "FID",
            Self::Cls => "CLS",
            Self::Ttfb => "TTFB",
            Self::Fcp => "FCP",
        }
    }
}

/// A single measurement handed to a telemetry sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub name: String,
    pub kind: MetricKind,
    pub timestamp: SystemTime,
    pub duration: Duration,
    pub component: String,
}

impl PerformanceMetric {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MetricKind, duration: Duration) -> Self {
        Self {
            name: name.into(),
            kind,
            timestamp: SystemTime::now(),
            duration,
            component: COMPONENT_APP_INITIALIZER.to_owned(),
        }
    }

    #[must_use]
    pub fn phase(name: impl Into<String>, duration: Duration) -> Self {
        Self::new(name, MetricKind::Phase, duration)
    }

    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }
}
