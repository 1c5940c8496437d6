#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use ignite_domain::asset::{CriticalResource, FontFace};
use ignite_domain::platform::SplashTransition;
use ignite_domain::signals::DeviceProfile;
use ignite_domain::telemetry::{MetricKind, PerformanceMetric};
use ignite_kernel::collaborators::*;
use ignite_telemetry::SharedSink;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug)]
pub struct FixedDevice(pub DeviceProfile);

#[async_trait]
impl DeviceInfo for FixedDevice {
    async fn profile(&self) -> Result<DeviceProfile, CollaboratorError> {
        Ok(self.0)
    }
}

#[derive(Debug, Default)]
pub struct BrokenDevice;

#[async_trait]
impl DeviceInfo for BrokenDevice {
    async fn profile(&self) -> Result<DeviceProfile, CollaboratorError> {
        Err(CollaboratorError::unavailable("device info bridge not attached"))
    }
}

/// Reports one frame metric as soon as it starts.
#[derive(Debug, Default)]
pub struct FrameMonitor {
    pub starts: AtomicUsize,
}

impl PerformanceMonitor for FrameMonitor {
    fn start(&self, sink: SharedSink) -> Result<(), CollaboratorError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        sink.record_metric(PerformanceMetric::new(
            "first_frame",
            MetricKind::Custom,
            Duration::from_millis(16),
        ));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingSplash {
    pub transitions: Mutex<Vec<SplashTransition>>,
}

#[async_trait]
impl SplashScreen for RecordingSplash {
    async fn hide(&self, transition: SplashTransition) -> Result<(), CollaboratorError> {
        self.transitions.lock().push(transition);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RefusingSplash;

#[async_trait]
impl SplashScreen for RefusingSplash {
    async fn hide(&self, _transition: SplashTransition) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::rejected("splash already detached"))
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

#[derive(Debug, Default)]
pub struct FailingAssets;

#[async_trait]
impl AssetLoader for FailingAssets {
    async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::unavailable(format!("{} missing from bundle", resource.id)))
    }
}
