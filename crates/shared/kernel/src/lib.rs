//! Startup kernel shared by every platform strategy.
//!
//! * [`contract::AppInitializer`]: the one interface bootstrap code talks to.
//! * [`launcher::Launcher`]: at-most-once run, shared waiting, timeout race and
//!   settlement into a terminal [`InitializationStatus`](ignite_domain::status::InitializationStatus).
//! * [`recorder::MetricsRecorder`] and [`registry::ResourceRegistry`]: per-instance
//!   metrics and the critical resource list.
//! * [`collaborators`]: interfaces of the platform capabilities phases call.
//!
//! ## Running phases
//! ```rust
//! use ignite_kernel::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sink = Arc::new(ignite_kernel::telemetry::NoopSink);
//! let launcher = Launcher::new(PlatformKind::Web, ResourceRegistry::new(), sink);
//! launcher
//!     .launch(AppInitializerOptions::default(), |ctx| async move {
//!         ctx.phase(PHASE_LOAD_FONTS, async { Ok::<_, PhaseError>(()) }).await;
//!         Ok(())
//!     })
//!     .await;
//! assert_eq!(launcher.status(), InitializationStatus::Completed);
//! # }
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! let cfg = ignite_kernel::config::load_bootstrap_config(Some("ignite.toml"))?;
//! ```
pub mod collaborators;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod contract;
pub mod error;
pub mod flags;
pub mod launcher;
pub mod phases;
pub mod prelude;
pub mod recorder;
pub mod registry;
pub mod splash;

pub use ignite_domain as domain;
pub use ignite_telemetry as telemetry;
