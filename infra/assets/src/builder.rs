use crate::error::{AssetError, AssetErrorExt};
use crate::store::{AssetStore, AssetStoreInner};
use ignite_domain::config::AssetsConfig;
use moka::sync::Cache;
use private::Sealed;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

const DEFAULT_CACHE_CAPACITY: u64 = 256;

#[derive(Debug, Clone)]
struct StoreConfig {
    cache_capacity: u64,
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { cache_capacity: DEFAULT_CACHE_CAPACITY, create: false }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct AssetStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> AssetStoreBuilder<S> {
    /// Maximum number of assets kept in memory.
    #[must_use = "Sets the cache capacity of the asset store"]
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    #[must_use = "Sets whether a missing root directory is created"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> AssetStoreBuilder<N> {
        AssetStoreBuilder { state, config: self.config }
    }
}

impl AssetStoreBuilder<NoRoot> {
    #[must_use = "Creates a new asset store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the asset root directory"]
    pub fn root(self, path: impl Into<PathBuf>) -> AssetStoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }

    /// Root and capacity from the `[assets]` section of the bootstrap config.
    #[must_use = "Applies the assets configuration"]
    pub fn config(self, config: &AssetsConfig) -> AssetStoreBuilder<WithRoot> {
        self.cache_capacity(config.cache_capacity).root(config.root.clone())
    }
}

impl AssetStoreBuilder<WithRoot> {
    /// Resolves the root to its physical path and returns the store handle.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Io`] if the root does not exist (and `create` is off)
    /// or cannot be created or resolved.
    pub async fn open(self) -> Result<AssetStore, AssetError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .await
                .context(format!("Failed to create asset root: {}", root.display()))?;
        }

        let canonical = fs::canonicalize(root)
            .await
            .context(format!("Failed to resolve asset root: {}", root.display()))?;
        info!(
            path = %canonical.display(),
            cache_capacity = self.config.cache_capacity,
            "Asset store opened"
        );

        Ok(AssetStore::from_inner(AssetStoreInner {
            root: canonical,
            cache: Cache::builder().max_capacity(self.config.cache_capacity).build(),
        }))
    }
}
