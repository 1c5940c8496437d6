use ignite_domain::flags::RuntimeFlags;
use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide [`RuntimeFlags`] written by an optimization phase.
#[derive(Debug, Default)]
pub struct FlagCell {
    bits: AtomicU32,
}

impl FlagCell {
    #[must_use]
    pub fn get(&self) -> RuntimeFlags {
        RuntimeFlags::from_bits_truncate(self.bits.load(Ordering::Acquire))
    }

    /// Adds `flags` to the current set and returns the result.
    pub fn insert(&self, flags: RuntimeFlags) -> RuntimeFlags {
        let previous = self.bits.fetch_or(flags.bits(), Ordering::AcqRel);
        RuntimeFlags::from_bits_truncate(previous | flags.bits())
    }
}
