#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `WordHub` crates: error enums, API models,
//! `OpenAPI`-documented handlers and feature slices.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines an API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `serde::Serialize`, `serde::Deserialize` and `utoipa::ToSchema`
///   unless they are already listed.
/// * **Serde Policy**: `rename_all = "camelCase"` unless overridden via `rename_all = "..."`.
///
/// # Example
///
/// ```rust,ignore
/// use whub_derive::api_model;
///
/// #[api_model]
/// pub struct HealthResponse {
///     pub status: &'static str,
///     pub uptime_seconds: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with its `OpenAPI` description.
///
/// Accepts the same arguments as `utoipa::path` (`get`, `post`, `path = "..."`,
/// `params(...)`, `responses(...)`, `tag = "..."`).
///
/// # Example
///
/// ```rust,ignore
/// use whub_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source error.
/// * `From<SourceError>` for those variants, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-local `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a `source` field (or a field marked
/// `#[source]` / `#[from]`) must also declare `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[whub_derive::whub_error]
/// pub enum DatabaseError {
///     #[error("SurrealDB error{}: {source}", format_context(.context))]
///     Surreal { source: surrealdb::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal database error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch(db: &Db) -> Result<Vec<String>, DatabaseError> {
///     db.query("SELECT ...").context("Loading words")?.take(0).map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn whub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `whub_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[whub_derive::whub_slice]
/// pub struct Lookup {
///     pub engine: QueryEngine,
/// }
///
/// let slice = Lookup::new(LookupInner { engine });
/// ```
#[proc_macro_attribute]
pub fn whub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
