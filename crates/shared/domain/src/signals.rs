//! Environment signals sampled by the optimization phases.

use serde::{Deserialize, Serialize};

/// Effective connection type as reported by the network information source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ConnectionType {
    #[must_use]
    pub const fn is_slow(self) -> bool {
        matches!(self, Self::Slow2g | Self::TwoG)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkQuality {
    pub effective_type: ConnectionType,
    pub downlink_mbps: Option<f64>,
    /// The user asked for reduced data usage.
    pub save_data: bool,
}

impl NetworkQuality {
    #[must_use]
    pub const fn new(effective_type: ConnectionType) -> Self {
        Self { effective_type, downlink_mbps: None, save_data: false }
    }

    #[must_use]
    pub const fn with_save_data(mut self, save_data: bool) -> Self {
        self.save_data = save_data;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    /// `None` when the device does not expose it.
    pub total_memory_mb: Option<u64>,
    pub low_power_mode: bool,
}

impl DeviceProfile {
    /// Devices below this amount of memory get a reduced image pipeline.
    pub const LOW_MEMORY_MB: u64 = 2048;

    #[must_use]
    pub fn is_low_memory(&self) -> bool {
        self.total_memory_mb.is_some_and(|mb| mb < Self::LOW_MEMORY_MB)
    }
}
