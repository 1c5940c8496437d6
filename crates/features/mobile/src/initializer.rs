use crate::builder::MobileInitializerBuilder;
use crate::device::platform_flags;
use async_trait::async_trait;
use ignite_kernel::collaborators::{DeviceInfo, PerformanceMonitor};
use ignite_kernel::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Mobile startup strategy.
///
/// Phases, in order: `load_fonts`, `preload_critical_assets`,
/// `init_performance_monitoring` and `apply_platform_optimizations`.
#[ignite_derive::handle]
pub struct MobileInitializer {
    pub(crate) launcher: Launcher,
    pub(crate) collaborators: Collaborators,
    pub(crate) device: Arc<dyn DeviceInfo>,
    pub(crate) monitor: Arc<dyn PerformanceMonitor>,
    pub(crate) fonts: Vec<FontFace>,
    pub(crate) flags: FlagCell,
    pub(crate) splash: SplashGate,
}

impl MobileInitializer {
    #[must_use]
    pub fn builder() -> MobileInitializerBuilder {
        MobileInitializerBuilder::default()
    }

    #[must_use]
    pub fn launcher(&self) -> &Launcher {
        &self.inner.launcher
    }

    async fn run(&self, ctx: RunContext) -> Result<(), PhaseError> {
        let options = ctx.options().clone();

        if options.preload_fonts {
            let faces = phases::font_plan(&self.fonts, ctx.registry());
            ctx.phase(PHASE_LOAD_FONTS, phases::load_fonts(self.collaborators.fonts.clone(), faces))
                .await;
        }

        if options.preloads_assets() {
            let assets = self.collaborators.assets.clone();
            ctx.phase(
                PHASE_PRELOAD_CRITICAL_ASSETS,
                phases::preload_assets(assets, ctx.registry(), &options),
            )
            .await;
        }

        if options.track_performance {
            ctx.phase(PHASE_INIT_PERFORMANCE_MONITORING, async {
                self.monitor
                    .start(ctx.telemetry().clone())
                    .context("Starting native performance monitor")
            })
            .await;
        }

        if options.optimizations_enabled() {
            ctx.phase(
                PHASE_APPLY_PLATFORM_OPTIMIZATIONS,
                self.apply_platform_optimizations(options.optimization_level),
            )
            .await;
        }

        Ok(())
    }

    async fn apply_platform_optimizations(
        &self,
        level: OptimizationLevel,
    ) -> Result<RuntimeFlags, PhaseError> {
        let profile = self.device.profile().await.context("Reading device profile")?;
        let flags = self.flags.insert(platform_flags(&profile, level));
        info!(
            memory_mb = ?profile.total_memory_mb,
            low_power = profile.low_power_mode,
            flags = ?flags,
            "Platform optimizations applied"
        );
        Ok(flags)
    }
}

#[async_trait]
impl AppInitializer for MobileInitializer {
    fn platform(&self) -> PlatformKind {
        PlatformKind::Mobile
    }

    async fn initialize(&self, options: AppInitializerOptions) {
        let this = self.clone();
        self.launcher.launch(options, move |ctx| async move { this.run(ctx).await }).await;
    }

    async fn hide_splash_screen(&self) {
        self.initialize(AppInitializerOptions::default()).await;
        self.splash.hide(self.collaborators.splash.as_ref(), SplashTransition::immediate()).await;
    }

    fn is_app_initialized(&self) -> bool {
        self.launcher.is_initialized()
    }

    fn initialization_status(&self) -> InitializationStatus {
        self.launcher.status()
    }

    fn initialization_metrics(&self) -> InitializationMetrics {
        self.launcher.metrics()
    }

    fn add_critical_resource(&self, id: &str, kind: AssetType) {
        self.launcher.registry().add(id, kind);
        debug!(resource = id, kind = %kind, "Critical resource added");
    }

    fn runtime_flags(&self) -> RuntimeFlags {
        self.flags.get()
    }
}
