use crate::defaults::{default_fonts, default_resources};
use crate::initializer::{MobileInitializer, MobileInitializerInner};
use ignite_domain::asset::{AssetType, FontFace};
use ignite_domain::platform::{PlatformKind, SplashTransition};
use ignite_kernel::collaborators::{Collaborators, DeviceInfo, Noop, PerformanceMonitor};
use ignite_kernel::prelude::{FlagCell, Launcher, ResourceRegistry, SplashGate};
use std::sync::Arc;

/// Fluent builder for [`MobileInitializer`].
#[derive(Debug)]
pub struct MobileInitializerBuilder {
    collaborators: Collaborators,
    device: Arc<dyn DeviceInfo>,
    monitor: Arc<dyn PerformanceMonitor>,
    fonts: Vec<FontFace>,
    resources: Vec<(String, AssetType)>,
}

impl Default for MobileInitializerBuilder {
    fn default() -> Self {
        Self {
            collaborators: Collaborators::default(),
            device: Arc::new(Noop),
            monitor: Arc::new(Noop),
            fonts: default_fonts(),
            resources: default_resources(),
        }
    }
}

impl MobileInitializerBuilder {
    #[must_use = "The builder must be finished with build()"]
    pub fn collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn device(mut self, device: Arc<dyn DeviceInfo>) -> Self {
        self.device = device;
        self
    }

    #[must_use = "The builder must be finished with build()"]
    pub fn monitor(mut self, monitor: Arc<dyn PerformanceMonitor>) -> Self {
        self.monitor = monitor;
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

    #[must_use]
    pub fn build(self) -> MobileInitializer {
        let registry = ResourceRegistry::with_resources(self.resources);
        let launcher =
            Launcher::new(PlatformKind::Mobile, registry, self.collaborators.telemetry.clone());

        MobileInitializer::from_inner(MobileInitializerInner {
            launcher,
            collaborators: self.collaborators,
            device: self.device,
            monitor: self.monitor,
            fonts: self.fonts,
            flags: FlagCell::default(),
            splash: SplashGate::default(),
        })
    }
}
