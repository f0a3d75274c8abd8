//! # memo-router-core
//!
//! Core types for the memo-router routing layer.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by the
//! registration side (`memo-router-std`) and the code that supplies handlers:
//!
//! - [`Handler`] / [`DynHandler`] / [`BoxHandler`] - opaque callables placed in
//!   a route's handler chain
//! - [`Namespace`] / [`Node`] - the tree-shaped handler registry that dotted
//!   references such as `"user.profile.show"` are looked up in
//! - [`HandlerRef`] - a chain element, either a concrete handler or a dotted
//!   reference that is compiled once at registration
//! - [`Methods`] - the set of HTTP verbs a route answers to
//!
//! # Error Types
//!
//! - [`RouteLoadError`] - registration-time failures; fatal for startup
//! - [`ParseMethodError`] - an unknown HTTP verb name

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod method;
mod namespace;

// Re-exports
pub use error::{BoxError, ParseMethodError, RouteLoadError};
pub use handler::{BoxHandler, DynHandler, Flow, Handler, HandlerRef, IntoFlow, boxed};
pub use method::Methods;
pub use namespace::{Namespace, Node};
