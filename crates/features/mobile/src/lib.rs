//! Mobile platform startup strategy.
//!
//! A leaner sequence than the web one: no web vitals and no service worker;
//! native performance monitoring and device-driven hints instead. The native
//! splash screen is dismissed without a fade.
//!
//! ```rust
//! use ignite_kernel::prelude::*;
//! use ignite_mobile::MobileInitializer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mobile = MobileInitializer::builder().build();
//! mobile.initialize(AppInitializerOptions::default().with_fonts(false)).await;
//! assert_eq!(mobile.initialization_status(), InitializationStatus::Completed);
//! # }
//! ```

mod builder;
mod defaults;
mod device;
mod initializer;

pub use builder::MobileInitializerBuilder;
pub use defaults::{default_fonts, default_resources};
pub use device::platform_flags;
pub use initializer::{MobileInitializer, MobileInitializerInner};
