use async_trait::async_trait;
use ignite_domain::asset::AssetType;
use ignite_domain::flags::RuntimeFlags;
use ignite_domain::metrics::InitializationMetrics;
use ignite_domain::options::AppInitializerOptions;
use ignite_domain::platform::PlatformKind;
use ignite_domain::status::InitializationStatus;
use std::fmt::Debug;

/// The startup contract every platform strategy implements.
///
/// `initialize` never fails from the caller's point of view: when it returns,
/// [`AppInitializer::is_app_initialized`] is `true` and the outcome is
/// available through [`AppInitializer::initialization_status`] and
/// [`AppInitializer::initialization_metrics`].
#[async_trait]
pub trait AppInitializer: Debug + Send + Sync {
    fn platform(&self) -> PlatformKind;

    /// Runs startup once; concurrent and repeated calls join or skip that run.
    async fn initialize(&self, options: AppInitializerOptions);

    /// Awaits [`AppInitializer::initialize`] with default options, then hides
    /// the splash screen at most once.
    async fn hide_splash_screen(&self);

    fn is_app_initialized(&self) -> bool;

    fn initialization_status(&self) -> InitializationStatus;

    /// Snapshot; partial while a run is in flight.
    fn initialization_metrics(&self) -> InitializationMetrics;

    /// Registers a resource for the next preload. A finished run is unaffected.
    fn add_critical_resource(&self, id: &str, kind: AssetType);

    /// Flags set by the optimization phase (empty until it ran).
    fn runtime_flags(&self) -> RuntimeFlags;
}
