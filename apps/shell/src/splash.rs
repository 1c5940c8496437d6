use async_trait::async_trait;
use ignite::kernel::collaborators::{CollaboratorError, SplashScreen};
use ignite::prelude::SplashTransition;
use tracing::info;

/// The shell has no window; it reports the dismissal instead.
#[derive(Debug)]
pub(crate) struct ConsoleSplash;

#[async_trait]
impl SplashScreen for ConsoleSplash {
    async fn hide(&self, transition: SplashTransition) -> Result<(), CollaboratorError> {
        info!(fade_ms = transition.fade.as_millis(), "Splash screen hidden");
        Ok(())
    }
}
