#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the startup infrastructure.
//!
//! * [`ignite_error`] turns a plain enum into a context-aware error type.
//! * [`handle`] turns a state struct into a cheaply cloneable `Arc` handle.
//! * [`main`] boots an `async fn main` on a pre-configured Tokio runtime profile.
//!
//! Examples are `ignore`d because a proc-macro crate cannot use its own macros
//! in doctests; the integration tests under `tests/` exercise them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Transforms an `async fn main` into a synchronous `fn main` that builds a
/// runtime from the selected profile and blocks on the original body.
///
/// # Arguments
///
/// * `event_loop` - Single-threaded cooperative scheduler (one event loop).
/// * `balanced` - Multi-threaded scheduler sized for client workloads.
/// * `default` - Uses the default configuration.
/// * `threads = N` - Overrides the worker count (ignored by `event_loop`).
///
/// # Examples
///
/// ```rust,ignore
/// #[ignite_runtime::main(event_loop)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a source,
///   enabling `?` on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source (`source` field, `#[source]` or `#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ignite_derive::ignite_error]
/// pub enum LoaderError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<Vec<u8>, LoaderError> {
///     std::fs::read(path).context("Reading font file")
/// }
/// ```
#[proc_macro_attribute]
pub fn ignite_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a shared handle around a state struct.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a
/// `Clone` wrapper over `Arc<<Name>Inner>` with `Deref` to the inner state.
///
/// # Example
/// ```rust,ignore
/// #[ignite_derive::handle]
/// pub struct WebInitializer {
///     launcher: Launcher,
/// }
///
/// let initializer = WebInitializer::from_inner(WebInitializerInner { launcher });
/// ```
#[proc_macro_attribute]
pub fn handle(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::handle::expand_handle(input).into()
}
