use crate::collaborators::SplashScreen;
use ignite_domain::platform::SplashTransition;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, trace, warn};

/// Lets the splash collaborator run at most once per initializer.
#[derive(Debug, Default)]
pub struct SplashGate {
    hidden: AtomicBool,
}

impl SplashGate {
    /// Hides the splash unless already done; failures are logged and swallowed.
    pub async fn hide(&self, splash: &dyn SplashScreen, transition: SplashTransition) {
        if self.hidden.swap(true, Ordering::AcqRel) {
            trace!("Splash screen already hidden");
            return;
        }

        match splash.hide(transition).await {
            Ok(()) => info!(fade_ms = transition.fade.as_millis(), "Splash screen hidden"),
            Err(err) => warn!(error = %err, "Failed to hide splash screen; continuing"),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Acquire)
    }
}
