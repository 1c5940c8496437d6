use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Runtime hints produced by the optimization phases.
    ///
    /// The rendering layer reads them after startup; they never change during a run
    /// once the optimization phase has applied them.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RuntimeFlags: u32 {
        /// Prefer low-bandwidth variants of every asset.
        const LOW_DATA = 1 << 0;
        const REDUCED_IMAGE_QUALITY = 1 << 1;
        const DISABLE_PREFETCH = 1 << 2;
        const ENABLE_PREFETCH = 1 << 3;
        const REDUCED_MOTION = 1 << 4;
        const SMALL_IMAGE_CACHE = 1 << 5;
    }
}

impl From<u32> for RuntimeFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for RuntimeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for RuntimeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}
