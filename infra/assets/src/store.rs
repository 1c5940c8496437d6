use crate::builder::AssetStoreBuilder;
use crate::error::{AssetError, AssetErrorExt};
use crate::font::FontFormat;
use crate::security;
use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, trace};

/// A cloneable handle to a sandboxed directory of startup assets.
///
/// Resource ids are the registry ids (`images/logo.svg`, `/fonts/Inter.woff2?v=2`);
/// they are resolved below the root and read with `tokio::fs`. Bytes read once
/// stay in a bounded in-memory cache keyed by the normalized id.
#[ignite_derive::handle]
pub struct AssetStore {
    pub(crate) root: PathBuf,
    pub(crate) cache: Cache<String, Arc<[u8]>>,
}

impl AssetStore {
    #[must_use = "The asset store is not usable until you call .open()"]
    pub fn builder() -> AssetStoreBuilder {
        AssetStoreBuilder::new()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Physical path of `id`, guaranteed to be inside the root.
    ///
    /// # Errors
    ///
    /// [`AssetError::PathTraversalAttempt`] for ids leaving the root,
    /// [`AssetError::NotFound`] for missing files.
    pub fn resolve(&self, id: &str) -> Result<PathBuf, AssetError> {
        security::resolve_path(&self.inner.root, id)
    }

    /// Reads `id`, serving repeated reads from the cache.
    ///
    /// # Errors
    ///
    /// Fails like [`AssetStore::resolve`], or with [`AssetError::Io`] when the
    /// file cannot be read.
    pub async fn read(&self, id: &str) -> Result<Arc<[u8]>, AssetError> {
        let key = security::cache_key(id)?;
        if let Some(bytes) = self.cache.get(&key) {
            trace!(asset = %key, "Asset served from cache");
            return Ok(bytes);
        }

        let path = self.resolve(id)?;
        let bytes: Arc<[u8]> = fs::read(&path)
            .await
            .context(format!("Failed to read asset: {}", path.display()))?
            .into();
        debug!(asset = %key, bytes = bytes.len(), "Asset loaded");
        self.cache.insert(key, bytes.clone());
        Ok(bytes)
    }

    /// Reads `id` and checks it carries a known font signature.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidFont`] when the bytes are not a font, otherwise as
    /// [`AssetStore::read`].
    pub async fn read_font(&self, id: &str) -> Result<FontFormat, AssetError> {
        let bytes = self.read(id).await?;
        FontFormat::detect(&bytes).ok_or_else(|| {
            self.evict(id);
            AssetError::InvalidFont { message: id.to_owned().into(), context: None }
        })
    }

    #[must_use]
    pub fn is_cached(&self, id: &str) -> bool {
        security::cache_key(id).is_ok_and(|key| self.cache.contains_key(&key))
    }

    pub fn evict(&self, id: &str) {
        if let Ok(key) = security::cache_key(id) {
            self.cache.invalidate(&key);
        }
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
