//! Interfaces of the platform capabilities startup phases call into.
//!
//! The kernel never implements real platform work. Strategies receive these
//! traits as `Arc<dyn ..>` and every method is allowed to fail; failures are
//! recorded against the calling phase and never abort startup.

mod error;

pub use error::{CollaboratorError, CollaboratorErrorExt};

use async_trait::async_trait;
use ignite_domain::asset::{CriticalResource, FontFace};
use ignite_domain::platform::SplashTransition;
use ignite_domain::signals::{DeviceProfile, NetworkQuality};
use ignite_domain::telemetry::WebVital;
use ignite_telemetry::{SharedSink, TracingSink};
use std::fmt::Debug;
use std::sync::Arc;

#[async_trait]
pub trait FontLoader: Debug + Send + Sync {
    async fn load(&self, face: &FontFace) -> Result<(), CollaboratorError>;
}

#[async_trait]
pub trait AssetLoader: Debug + Send + Sync {
    async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError>;
}

/// Removes the splash screen (a DOM node fade, a native splash API call).
#[async_trait]
pub trait SplashScreen: Debug + Send + Sync {
    async fn hide(&self, transition: SplashTransition) -> Result<(), CollaboratorError>;
}

#[async_trait]
pub trait NetworkMonitor: Debug + Send + Sync {
    async fn quality(&self) -> Result<NetworkQuality, CollaboratorError>;
}

#[async_trait]
pub trait ServiceWorkerRegistrar: Debug + Send + Sync {
    async fn register(&self, script_url: &str) -> Result<(), CollaboratorError>;
}

/// Registers an observer that reports one web vital into `sink` whenever the
/// browser measures it. Registration itself is synchronous.
pub trait VitalsObserver: Debug + Send + Sync {
    fn observe(&self, vital: WebVital, sink: SharedSink) -> Result<(), CollaboratorError>;
}

#[async_trait]
pub trait DeviceInfo: Debug + Send + Sync {
    async fn profile(&self) -> Result<DeviceProfile, CollaboratorError>;
}

/// Starts native frame/memory monitoring that reports into `sink`.
pub trait PerformanceMonitor: Debug + Send + Sync {
    fn start(&self, sink: SharedSink) -> Result<(), CollaboratorError>;
}

/// Stand-in for every capability: succeeds without doing anything and reports
/// neutral signals (unknown network, unknown device).
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

#[async_trait]
impl FontLoader for Noop {
    async fn load(&self, _face: &FontFace) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[async_trait]
impl AssetLoader for Noop {
    async fn preload(&self, _resource: &CriticalResource) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[async_trait]
impl SplashScreen for Noop {
    async fn hide(&self, _transition: SplashTransition) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[async_trait]
impl NetworkMonitor for Noop {
    async fn quality(&self) -> Result<NetworkQuality, CollaboratorError> {
        Ok(NetworkQuality::default())
    }
}

#[async_trait]
impl ServiceWorkerRegistrar for Noop {
    async fn register(&self, _script_url: &str) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

impl VitalsObserver for Noop {
    fn observe(&self, _vital: WebVital, _sink: SharedSink) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[async_trait]
impl DeviceInfo for Noop {
    async fn profile(&self) -> Result<DeviceProfile, CollaboratorError> {
        Ok(DeviceProfile::default())
    }
}

impl PerformanceMonitor for Noop {
    fn start(&self, _sink: SharedSink) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Capabilities every platform strategy needs.
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub fonts: Arc<dyn FontLoader>,
    pub assets: Arc<dyn AssetLoader>,
    pub splash: Arc<dyn SplashScreen>,
    pub telemetry: SharedSink,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            fonts: Arc::new(Noop),
            assets: Arc::new(Noop),
            splash: Arc::new(Noop),
            telemetry: Arc::new(TracingSink),
        }
    }
}

impl Collaborators {
    #[must_use = "Collaborators are consumed by a platform strategy builder"]
    pub fn with_fonts(mut self, fonts: Arc<dyn FontLoader>) -> Self {
        self.fonts = fonts;
        self
    }

    #[must_use = "Collaborators are consumed by a platform strategy builder"]
    pub fn with_assets(mut self, assets: Arc<dyn AssetLoader>) -> Self {
        self.assets = assets;
        self
    }

    #[must_use = "Collaborators are consumed by a platform strategy builder"]
    pub fn with_splash(mut self, splash: Arc<dyn SplashScreen>) -> Self {
        self.splash = splash;
        self
    }

    #[must_use = "Collaborators are consumed by a platform strategy builder"]
    pub fn with_telemetry(mut self, telemetry: SharedSink) -> Self {
        self.telemetry = telemetry;
        self
    }
}
