use crate::options::AppInitializerOptions;
use crate::platform::PlatformKind;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a shell needs to boot, loaded from `ignite.toml` plus `IGNITE__*` overrides.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfigInner {
    /// Overrides platform detection when set.
    pub platform: Option<PlatformKind>,
    pub initializer: AppInitializerOptions,
    pub logging: LoggingConfig,
    pub assets: AssetsConfig,
    pub web: WebConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(flatten, default)]
    inner: Arc<BootstrapConfigInner>,
}

impl Deref for BootstrapConfig {
    type Target = BootstrapConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BootstrapConfig {
    fn deref_mut(&mut self) -> &mut BootstrapConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Rolling log directory; console only when unset.
    pub directory: Option<PathBuf>,
    pub env_filter: Option<String>,
}

/// Local asset root used by the file-backed loaders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub root: PathBuf,
    /// Maximum number of decoded assets kept in memory.
    pub cache_capacity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Script registered in the background; registration is skipped when unset.
    pub service_worker: Option<String>,
    #[serde(with = "crate::duration::millis")]
    pub splash_fade: std::time::Duration,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, env_filter: None }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("public"), cache_capacity: 256 }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            service_worker: Some("/service-worker.js".to_owned()),
            splash_fade: crate::platform::SplashTransition::WEB_FADE,
        }
    }
}
