use crate::defaults::{DEFAULT_SERVICE_WORKER, default_fonts, default_resources};
use crate::initializer::{WebInitializer, WebInitializerInner};
use ignite_domain::asset::{AssetType, FontFace};
use ignite_domain::config::WebConfig;
use ignite_domain::platform::{PlatformKind, SplashTransition};
use ignite_kernel::collaborators::{
    Collaborators, NetworkMonitor, Noop, ServiceWorkerRegistrar, VitalsObserver,
};
use ignite_kernel::prelude::{FlagCell, Launcher, ResourceRegistry, SplashGate};
use std::sync::Arc;
use std::time::Duration;

/// Fluent builder for [`WebInitializer`].
///
/// Starts from the default resource and font lists and no-op collaborators.
#[derive(Debug)]
pub struct WebInitializerBuilder {
    collaborators: Collaborators,
    network: Arc<dyn NetworkMonitor>,
    service_worker: Arc<dyn ServiceWorkerRegistrar>,
    vitals: Arc<dyn VitalsObserver>,
    service_worker_url: Option<String>,
    fonts: Vec<FontFace>,
    resources: Vec<(String, AssetType)>,
    splash_fade: Duration,
}

impl Default for WebInitializerBuilder {
    fn default() -> Self {
        Self {
            collaborators: Collaborators::default(),
            network: Arc::new(Noop),
            service_worker: Arc::new(Noop),
            vitals: Arc::new(Noop),
            service_worker_url: Some(DEFAULT_SERVICE_WORKER.to_owned()),
            fonts: default_fonts(),
            resources: default_resources(),
            splash_fade: SplashTransition::WEB_FADE,
        }
    }
}

impl WebInitializerBuilder {
    #[must_use = "The builder must be finished with build()"]
    pub fn collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn network(mut self, network: Arc<dyn NetworkMonitor>) -> Self {
        self.network = network;
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn service_worker(mut self, registrar: Arc<dyn ServiceWorkerRegistrar>) -> Self {
        self.service_worker = registrar;
        self
    }

    /// Script registered in the background; `None` disables registration.
    #[must_use = "The builder must be finished with build()"]
    pub fn service_worker_url(mut self, url: Option<impl Into<String>>) -> Self {
        self.service_worker_url = url.map(Into::into);
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn vitals(mut self, vitals: Arc<dyn VitalsObserver>) -> Self {
        self.vitals = vitals;
        self
    }

    /// Replaces the default font faces.
    #[must_use = "The builder must be finished with build()"]
    pub fn fonts(mut self, fonts: impl IntoIterator<Item = FontFace>) -> Self {
        self.fonts = fonts.into_iter().collect();
        self
    }

    /// Replaces the default critical resources.
    #[must_use = "The builder must be finished with build()"]
    pub fn resources<S: Into<String>>(
        mut self,
        resources: impl IntoIterator<Item = (S, AssetType)>,
    ) -> Self {
        self.resources = resources.into_iter().map(|(id, kind)| (id.into(), kind)).collect();
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn resource(mut self, id: impl Into<String>, kind: AssetType) -> Self {
        self.resources.push((id.into(), kind));
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub const fn splash_fade(mut self, fade: Duration) -> Self {
        self.splash_fade = fade;
        self
    }

    /// Applies the `[web]` section of the bootstrap config.
    #[must_use = "The builder must be finished with build()"]
    pub fn config(mut self, config: &WebConfig) -> Self {
        self.service_worker_url = config.service_worker.clone();
        self.splash_fade = config.splash_fade;
        self
    }

    #[must_use]
    pub fn build(self) -> WebInitializer {
        let registry = ResourceRegistry::with_resources(self.resources);
        let launcher =
            Launcher::new(PlatformKind::Web, registry, self.collaborators.telemetry.clone());

        WebInitializer::from_inner(WebInitializerInner {
            launcher,
            collaborators: self.collaborators,
            network: self.network,
            service_worker: self.service_worker,
            vitals: self.vitals,
            service_worker_url: self.service_worker_url,
            fonts: self.fonts,
            transition: SplashTransition::fade(self.splash_fade),
            flags: FlagCell::default(),
            splash: SplashGate::default(),
        })
    }
}
