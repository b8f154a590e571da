#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared across the workspace: error enums, feature slices,
//! API models/handlers and the runtime entry point.
//!
//! Examples are `ignore`d because a proc-macro crate cannot use its own macros
//! in doctests; the `tests/ui` cases cover the error macro end to end.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a sync `main` running on a profiled Tokio runtime.
///
/// Profiles: `high_performance`, `memory_efficient`, `default` (also used when no
/// argument is given). The function must return a `Result`.
///
/// ```rust,ignore
/// #[enlist_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize`, `Deserialize` and `utoipa::ToSchema` when missing,
/// renames fields to `camelCase` and denies unknown fields unless told otherwise.
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct RegisterRequest {
///     pub name: Option<String>,
///     pub email: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Documents an Axum handler with `utoipa::path`, forwarding the arguments verbatim.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum on top of `thiserror`.
///
/// Every variant must use named fields. Variants that wrap another error need a
/// `source` field (or a field marked `#[source]`/`#[from]`) and a
/// `context: Option<Cow<'static, str>>` field.
///
/// Generated items:
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<Name>Ext` with `.context(..)` for `Result<T, Name>` and `Result<T, Source>`.
/// * `From<Source>` for every variant with a source.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-level `format_context` helper for `#[error(..)]` strings.
///
/// ```rust,ignore
/// #[enlist_error]
/// pub enum DatabaseError {
///     #[error("SurrealDB error{}: {source}", format_context(.context))]
///     Surreal { source: surrealdb::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal database error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn enlist_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a cheap `Arc` handle
/// that derefs to it and implements `FeatureSlice` so it can be registered in
/// the kernel state.
///
/// ```rust,ignore
/// #[enlist_derive::enlist_slice]
/// pub struct Registration {
///     pub workflow: RegistrationWorkflow,
/// }
///
/// let slice = Registration::new(RegistrationInner { workflow });
/// ```
#[proc_macro_attribute]
pub fn enlist_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
