//! Everything a platform strategy needs in one import.

pub use crate::collaborators::{
    AssetLoader, CollaboratorError, Collaborators, FontLoader, Noop, SplashScreen,
};
pub use crate::contract::AppInitializer;
pub use crate::error::{PhaseError, PhaseErrorExt};
pub use crate::flags::FlagCell;
pub use crate::launcher::{Launcher, RunContext};
pub use crate::phases;
pub use crate::registry::ResourceRegistry;
pub use crate::splash::SplashGate;
pub use ignite_domain::asset::{AssetType, CriticalResource, FontFace};
pub use ignite_domain::constants::*;
pub use ignite_domain::flags::RuntimeFlags;
pub use ignite_domain::metrics::InitializationMetrics;
pub use ignite_domain::options::{AppInitializerOptions, OptimizationLevel};
pub use ignite_domain::platform::{PlatformKind, SplashTransition};
pub use ignite_domain::status::InitializationStatus;
pub use ignite_telemetry::{SharedSink, TelemetrySink};
