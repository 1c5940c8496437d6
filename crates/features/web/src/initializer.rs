use crate::builder::WebInitializerBuilder;
use crate::network::network_flags;
use async_trait::async_trait;
use ignite_domain::telemetry::WebVital;
use ignite_kernel::collaborators::{NetworkMonitor, ServiceWorkerRegistrar, VitalsObserver};
use ignite_kernel::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Web startup strategy.
///
/// Phases, in order: `load_fonts`, `preload_critical_assets`, `init_web_vitals`,
/// `register_service_worker` (background) and `apply_network_optimizations`.
#[ignite_derive::handle]
pub struct WebInitializer {
    pub(crate) launcher: Launcher,
    pub(crate) collaborators: Collaborators,
    pub(crate) network: Arc<dyn NetworkMonitor>,
    pub(crate) service_worker: Arc<dyn ServiceWorkerRegistrar>,
    pub(crate) vitals: Arc<dyn VitalsObserver>,
    pub(crate) service_worker_url: Option<String>,
    pub(crate) fonts: Vec<FontFace>,
    pub(crate) transition: SplashTransition,
    pub(crate) flags: FlagCell,
    pub(crate) splash: SplashGate,
}

impl WebInitializer {
    #[must_use]
    pub fn builder() -> WebInitializerBuilder {
        WebInitializerBuilder::default()
    }

    /// The launcher driving this strategy; exposes status updates.
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
            ctx.phase(PHASE_INIT_WEB_VITALS, async { self.observe_vitals(ctx.telemetry()) }).await;
        }

        if options.optimizations_enabled() {
            if let Some(url) = self.service_worker_url.clone() {
                let registrar = self.service_worker.clone();
                ctx.spawn_background(PHASE_REGISTER_SERVICE_WORKER, async move {
                    registrar.register(&url).await.context("Registering service worker")?;
                    info!(script = %url, "Service worker registered");
                    Ok(())
                });
            }

            ctx.phase(
                PHASE_APPLY_NETWORK_OPTIMIZATIONS,
                self.apply_network_optimizations(options.optimization_level),
            )
            .await;
        }

        Ok(())
    }

    fn observe_vitals(&self, sink: &SharedSink) -> Result<usize, PhaseError> {
        let mut failures = Vec::new();
        for vital in WebVital::ALL {
            if let Err(err) = self.vitals.observe(vital, sink.clone()) {
                failures.push(format!("{}: {err}", vital.as_str()));
            }
        }

        if failures.is_empty() {
            debug!(observers = WebVital::ALL.len(), "Web vitals observers registered");
            Ok(WebVital::ALL.len())
        } else {
            Err(PhaseError::partial(failures.len(), WebVital::ALL.len(), &failures))
        }
    }

    async fn apply_network_optimizations(
        &self,
        level: OptimizationLevel,
    ) -> Result<RuntimeFlags, PhaseError> {
        let quality = self.network.quality().await.context("Reading network quality")?;
        let flags = self.flags.insert(network_flags(&quality, level));
        info!(
            connection = ?quality.effective_type,
            save_data = quality.save_data,
            flags = ?flags,
            "Network optimizations applied"
        );
        Ok(flags)
    }
}

#[async_trait]
impl AppInitializer for WebInitializer {
    fn platform(&self) -> PlatformKind {
        PlatformKind::Web
    }

    async fn initialize(&self, options: AppInitializerOptions) {
        let this = self.clone();
        self.launcher.launch(options, move |ctx| async move { this.run(ctx).await }).await;
    }

    async fn hide_splash_screen(&self) {
        self.initialize(AppInitializerOptions::default()).await;
        self.splash.hide(self.collaborators.splash.as_ref(), self.transition).await;
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
