use crate::store::AssetStore;
use async_trait::async_trait;
use ignite_domain::asset::{CriticalResource, FontFace};
use ignite_kernel::collaborators::{AssetLoader, CollaboratorError, FontLoader};
use tracing::debug;

#[async_trait]
impl AssetLoader for AssetStore {
    async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError> {
        self.read(&resource.id).await?;
        Ok(())
    }
}

#[async_trait]
impl FontLoader for AssetStore {
    async fn load(&self, face: &FontFace) -> Result<(), CollaboratorError> {
        let format = self.read_font(&face.url).await?;
        debug!(
            family = %face.family,
            weight = face.descriptor.weight,
            format = format.as_str(),
            "Font face loaded"
        );
        Ok(())
    }
}
