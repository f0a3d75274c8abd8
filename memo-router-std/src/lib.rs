//! # memo-router-std
//!
//! Registration, lookup and URL generation for the memo-router layer.
//!
//! This crate provides:
//! - **Handler resolution**: [`resolver::resolve`] walks dotted references
//!   such as `"user.profile.show"` through a [`Namespace`]
//! - **Route table**: [`RouteTableBuilder`] and the sealed [`RouteTable`]
//! - **Resources**: [`Resource`] and the seven-route [`REST_MAP`]
//! - **URL generation**: [`url::build`], [`UrlParams`] and [`url_params!`]
//! - **Matching**: [`SegmentMatcher`] and, with the `matchit` feature,
//!   `MatchitMatcher`
//! - **Tower adapters** behind the `tower` feature
//!
//! # Feature Flags
//!
//! - `tracing`: registration and lookup events through `tracing`
//! - `matchit`: the `matchit` matcher backend
//! - `tower`: `HandlerService` / `ServiceHandler`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use memo_router_core;
pub use memo_router_core::{
    BoxError, BoxHandler, DynHandler, Flow, Handler, HandlerRef, IntoFlow, Methods, Namespace,
    Node, ParseMethodError, RouteLoadError, boxed,
};

#[macro_use]
mod macros;

pub mod inflect;
pub mod options;
pub mod resolver;
pub mod resource;
pub mod table;
pub mod testing;
#[cfg(feature = "tower")]
pub mod tower;
pub mod url;

pub use options::RouterOptions;
pub use resolver::{Resolved, resolve};
pub use resource::{HandlerSource, REST_MAP, Resource, ResourceArg, RestAction};
#[cfg(feature = "matchit")]
pub use table::MatchitMatcher;
pub use table::{
    Matcher, PathMatch, Recognized, Route, RouteId, RouteMatch, RouteOptions, RouteTable,
    RouteTableBuilder, SegmentMatcher,
};
pub use url::{ParamValue, UrlParams};
