//! Facade crate for the startup orchestrator.
//! Re-exports the domain, kernel and platform strategies, and picks one strategy per process.
//! Keep this crate thin: it composes other crates, it does not run phases itself.
//!
//! ## Usage
//! - Build an [`Orchestrator`] at bootstrap (`from_config`, `for_platform` or `detect`).
//! - [`Orchestrator::install`] it once; everything else reaches it through [`Orchestrator::global`].

pub use ignite_domain as domain;
pub use ignite_kernel as kernel;
pub use ignite_telemetry as telemetry;

mod orchestrator;

pub use orchestrator::Orchestrator;

/// Platform strategies.
pub mod platforms {
    pub use ignite_mobile::{MobileInitializer, MobileInitializerBuilder};
    pub use ignite_web::{WebInitializer, WebInitializerBuilder};
}

pub mod prelude {
    pub use crate::Orchestrator;
    pub use ignite_kernel::prelude::*;
}
