use ignite_domain::flags::RuntimeFlags;
use ignite_domain::options::OptimizationLevel;
use ignite_domain::signals::DeviceProfile;

/// Runtime hints for the device the app is running on.
#[must_use]
pub fn platform_flags(profile: &DeviceProfile, level: OptimizationLevel) -> RuntimeFlags {
    let mut flags = RuntimeFlags::empty();

    if profile.low_power_mode {
        flags |= RuntimeFlags::REDUCED_MOTION;
    }
    if profile.is_low_memory() {
        flags |= RuntimeFlags::REDUCED_IMAGE_QUALITY | RuntimeFlags::SMALL_IMAGE_CACHE;
    }
    if level == OptimizationLevel::Aggressive {
        flags |= RuntimeFlags::REDUCED_MOTION | RuntimeFlags::SMALL_IMAGE_CACHE;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(memory: Option<u64>, low_power: bool) -> DeviceProfile {
        DeviceProfile { total_memory_mb: memory, low_power_mode: low_power }
    }

    #[test]
    fn test_capable_device_gets_no_hints() {
        let flags = platform_flags(&profile(Some(8192), false), OptimizationLevel::Balanced);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_unknown_memory_is_not_low() {
        let flags = platform_flags(&profile(None, false), OptimizationLevel::Balanced);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_low_memory_shrinks_images() {
        let flags = platform_flags(&profile(Some(1536), false), OptimizationLevel::Balanced);
        assert_eq!(flags, RuntimeFlags::REDUCED_IMAGE_QUALITY | RuntimeFlags::SMALL_IMAGE_CACHE);
    }

    #[test]
    fn test_low_power_reduces_motion() {
        let flags = platform_flags(&profile(Some(4096), true), OptimizationLevel::Balanced);
        assert_eq!(flags, RuntimeFlags::REDUCED_MOTION);
    }

    #[test]
    fn test_aggressive_applies_regardless_of_device() {
        let flags = platform_flags(&profile(Some(16384), false), OptimizationLevel::Aggressive);
        assert_eq!(flags, RuntimeFlags::REDUCED_MOTION | RuntimeFlags::SMALL_IMAGE_CACHE);
    }
}
