use async_trait::async_trait;
use ignite_domain::config::BootstrapConfig;
use ignite_kernel::prelude::*;
use ignite_mobile::MobileInitializer;
use ignite_web::WebInitializer;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

static GLOBAL: OnceLock<Orchestrator> = OnceLock::new();

/// Owns the one [`AppInitializer`] strategy chosen for this process.
///
/// Every contract operation delegates to that strategy, so the orchestrator
/// can be handed around wherever an `AppInitializer` is expected.
#[derive(Clone)]
pub struct Orchestrator {
    initializer: Arc<dyn AppInitializer>,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("platform", &self.initializer.platform())
            .field("status", &self.initializer.initialization_status())
            .finish()
    }
}

impl Orchestrator {
    #[must_use]
    pub fn new(initializer: Arc<dyn AppInitializer>) -> Self {
        Self { initializer }
    }

    /// Builds the default strategy for `kind`.
    #[must_use]
    pub fn for_platform(kind: PlatformKind, collaborators: Collaborators) -> Self {
        debug!(platform = %kind, "Selecting startup strategy");
        match kind {
            PlatformKind::Web => {
                Self::new(Arc::new(WebInitializer::builder().collaborators(collaborators).build()))
            },
            PlatformKind::Mobile => Self::new(Arc::new(
                MobileInitializer::builder().collaborators(collaborators).build(),
            )),
        }
    }

    /// Strategy for the platform this binary was compiled for.
    #[must_use]
    pub fn detect(collaborators: Collaborators) -> Self {
        Self::for_platform(PlatformKind::current(), collaborators)
    }

    /// Strategy described by the bootstrap configuration.
    ///
    /// An unset `platform` falls back to [`PlatformKind::current`].
    #[must_use]
    pub fn from_config(config: &BootstrapConfig, collaborators: Collaborators) -> Self {
        let kind = config.platform.unwrap_or_else(PlatformKind::current);
        info!(platform = %kind, "Startup strategy configured");
        match kind {
            PlatformKind::Web => Self::new(Arc::new(
                WebInitializer::builder().collaborators(collaborators).config(&config.web).build(),
            )),
            PlatformKind::Mobile => Self::for_platform(kind, collaborators),
        }
    }

    /// Makes `self` the process-wide orchestrator.
    ///
    /// # Errors
    ///
    /// Gives `self` back when an orchestrator is already installed, including
    /// one lazily created by [`Orchestrator::global`].
    pub fn install(self) -> Result<&'static Self, Self> {
        let mut candidate = Some(self);
        let installed = GLOBAL.get_or_init(|| {
            candidate.take().unwrap_or_else(|| Self::detect(Collaborators::default()))
        });

        match candidate {
            None => {
                info!(platform = %installed.platform(), "Orchestrator installed");
                Ok(installed)
            },
            Some(rejected) => {
                warn!(platform = %installed.platform(), "Orchestrator already installed");
                Err(rejected)
            },
        }
    }

    /// The installed orchestrator, or a default one for the current platform
    /// with no-op collaborators when bootstrap never installed one.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            warn!("No orchestrator installed; falling back to platform defaults");
            Self::detect(Collaborators::default())
        })
    }

    #[must_use]
    pub fn initializer(&self) -> &Arc<dyn AppInitializer> {
        &self.initializer
    }
}

#[async_trait]
impl AppInitializer for Orchestrator {
    fn platform(&self) -> PlatformKind {
        self.initializer.platform()
    }

    async fn initialize(&self, options: AppInitializerOptions) {
        self.initializer.initialize(options).await;
    }

    async fn hide_splash_screen(&self) {
        self.initializer.hide_splash_screen().await;
    }

    fn is_app_initialized(&self) -> bool {
        self.initializer.is_app_initialized()
    }

    fn initialization_status(&self) -> InitializationStatus {
        self.initializer.initialization_status()
    }

    fn initialization_metrics(&self) -> InitializationMetrics {
        self.initializer.initialization_metrics()
    }

    fn add_critical_resource(&self, id: &str, kind: AssetType) {
        self.initializer.add_critical_resource(id, kind);
    }

    fn runtime_flags(&self) -> RuntimeFlags {
        self.initializer.runtime_flags()
    }
}
