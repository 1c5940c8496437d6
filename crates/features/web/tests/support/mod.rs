#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use ignite_domain::asset::{CriticalResource, FontFace};
use ignite_domain::platform::SplashTransition;
use ignite_domain::signals::NetworkQuality;
use ignite_domain::telemetry::WebVital;
use ignite_kernel::collaborators::*;
use ignite_telemetry::SharedSink;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every call it receives, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn push(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl FontLoader for Recorder {
    async fn load(&self, face: &FontFace) -> Result<(), CollaboratorError> {
        self.push(face.url.clone());
        Ok(())
    }
}

#[async_trait]
impl AssetLoader for Recorder {
    async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError> {
        self.push(resource.id.clone());
        Ok(())
    }
}

#[async_trait]
impl ServiceWorkerRegistrar for Recorder {
    async fn register(&self, script_url: &str) -> Result<(), CollaboratorError> {
        self.push(script_url);
        Ok(())
    }
}

impl VitalsObserver for Recorder {
    fn observe(&self, vital: WebVital, _sink: SharedSink) -> Result<(), CollaboratorError> {
        self.push(vital.as_str());
        Ok(())
    }
}

/// Fails every preload.
#[derive(Debug, Default)]
pub struct FailingAssets;

#[async_trait]
impl AssetLoader for FailingAssets {
    async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::unavailable(format!("{} not reachable", resource.id)))
    }
}

/// Font loads that never finish.
#[derive(Debug, Default)]
pub struct StalledFonts;

#[async_trait]
impl FontLoader for StalledFonts {
    async fn load(&self, _face: &FontFace) -> Result<(), CollaboratorError> {
        std::future::pending().await
    }
}

#[derive(Debug)]
pub struct FixedNetwork(pub NetworkQuality);

#[async_trait]
impl NetworkMonitor for FixedNetwork {
    async fn quality(&self) -> Result<NetworkQuality, CollaboratorError> {
        Ok(self.0)
    }
}

#[derive(Debug, Default)]
pub struct CountingSplash {
    pub hides: AtomicUsize,
    pub last_fade_ms: AtomicUsize,
}

impl CountingSplash {
    pub fn count(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SplashScreen for CountingSplash {
    async fn hide(&self, transition: SplashTransition) -> Result<(), CollaboratorError> {
        self.hides.fetch_add(1, Ordering::SeqCst);
        let fade = usize::try_from(transition.fade.as_millis()).unwrap_or(usize::MAX);
        self.last_fade_ms.store(fade, Ordering::SeqCst);
        Ok(())
    }
}
