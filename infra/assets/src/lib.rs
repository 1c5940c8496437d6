//! A sandboxed asset store backing the font and asset preload phases.
//!
//! # Core Features
//!
//! - **Sandbox Security**: resource ids are resolved lexically and physically against the
//!   root; `..` escapes, absolute ids and symlinks leaving the root are refused.
//! - **Warm Cache**: preloaded bytes are kept in a bounded `moka` cache, so the first screen
//!   reads them from memory.
//! - **Font Validation**: font loads check the file signature (WOFF, WOFF2, TrueType, OpenType).
//!
//! # Examples
//!
//! ```rust
//! use ignite_assets::{AssetError, AssetStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AssetError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # std::fs::write(tmp.path().join("app.json"), b"{}").unwrap();
//!     let store = AssetStore::builder().root(tmp.path()).cache_capacity(64).open().await?;
//!
//!     let bytes = store.read("app.json").await?;
//!     assert_eq!(&*bytes, b"{}");
//!     assert!(store.is_cached("app.json"));
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod font;
mod loader;
mod security;
mod store;

pub use builder::AssetStoreBuilder;
pub use error::{AssetError, AssetErrorExt};
pub use font::FontFormat;
pub use store::{AssetStore, AssetStoreInner};
