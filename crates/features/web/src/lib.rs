//! Web platform startup strategy.
//!
//! ```rust
//! use ignite_kernel::prelude::*;
//! use ignite_web::WebInitializer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let web = WebInitializer::builder().service_worker_url(None::<String>).build();
//! web.initialize(AppInitializerOptions::default()).await;
//! assert!(web.is_app_initialized());
//! # }
//! ```

mod builder;
mod defaults;
mod initializer;
mod network;

pub use builder::WebInitializerBuilder;
pub use defaults::{DEFAULT_SERVICE_WORKER, default_fonts, default_resources};
pub use initializer::{WebInitializer, WebInitializerInner};
pub use network::network_flags;
