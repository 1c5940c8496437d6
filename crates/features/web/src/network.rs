use ignite_domain::flags::RuntimeFlags;
use ignite_domain::options::OptimizationLevel;
use ignite_domain::signals::{ConnectionType, NetworkQuality};

/// Runtime hints for the observed connection.
///
/// Low-data mode always wins over prefetching.
#[must_use]
pub fn network_flags(quality: &NetworkQuality, level: OptimizationLevel) -> RuntimeFlags {
    let aggressive = level == OptimizationLevel::Aggressive;
    let mut flags = RuntimeFlags::empty();

    if quality.save_data {
        flags |= RuntimeFlags::LOW_DATA;
    }

    match quality.effective_type {
        ConnectionType::Slow2g | ConnectionType::TwoG => {
            flags |= RuntimeFlags::LOW_DATA
                | RuntimeFlags::REDUCED_IMAGE_QUALITY
                | RuntimeFlags::DISABLE_PREFETCH;
        },
        ConnectionType::ThreeG => {
            flags |= RuntimeFlags::REDUCED_IMAGE_QUALITY;
            if aggressive {
                flags |= RuntimeFlags::DISABLE_PREFETCH;
            }
        },
        ConnectionType::FourG if aggressive => flags |= RuntimeFlags::ENABLE_PREFETCH,
        ConnectionType::FourG | ConnectionType::Unknown => {},
    }

    if flags.contains(RuntimeFlags::LOW_DATA) {
        flags.remove(RuntimeFlags::ENABLE_PREFETCH);
    }
    flags
}
