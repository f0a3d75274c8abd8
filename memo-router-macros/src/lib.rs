//! Procedural macros for memo-router.
//!
//! - `#[controller]` - build a handler registry from an inline module tree

use proc_macro::TokenStream;

mod controller;

/// Turn an inline module of handler functions into a handler registry.
///
/// Adds `pub fn namespace() -> memo_router::Namespace<Request>` to the
/// module. Every `pub fn` / `pub async fn` taking exactly one argument is
/// registered under its own name; every inline `pub mod` becomes a nested
/// namespace, so `posts::admin::list` is reachable as `"posts.admin.list"`
/// once the result is mounted under `posts`.
///
/// The request type is taken from `request = Type` or, failing that, from
/// the first handler's argument. It is resolved inside the module.
///
/// # Example
///
/// ```rust,ignore
/// #[memo_router::controller(request = Request)]
/// pub mod posts {
///     use super::Request;
///
///     pub async fn index(req: Request) { /* ... */ }
///     pub async fn show(req: Request) -> Result<Flow, BoxError> { /* ... */ }
///
///     pub mod comments {
///         use super::Request;
///         pub async fn index(req: Request) { /* ... */ }
///     }
/// }
///
/// let registry = Namespace::new().namespace("posts", posts::namespace());
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_impl(attr, item)
}
