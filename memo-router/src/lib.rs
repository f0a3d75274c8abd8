//! # memo-router
//!
//! Named REST routes on top of a nested handler registry.
//!
//! - **Resources**: one declaration expands into the seven conventional
//!   routes (`index`, `new`, `create`, `show`, `edit`, `update`, `destroy`)
//! - **Dotted references**: chain elements such as `"user.profile.show"` are
//!   looked up in a [`Namespace`] once, at registration
//! - **Reverse URLs**: `table.url("edit_post", Some(&params))` fills `:id`
//!   and turns the remaining parameters into a query string
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use memo_router::prelude::*;
//!
//! let registry = Namespace::new()
//!     .handler("home", |req: Request| async move { /* ... */ })
//!     .namespace("posts", posts::namespace());
//!
//! let mut builder = RouteTableBuilder::new(registry);
//! builder.get_named("home", "/", ["home"])?;
//! resources!(builder, "posts", "/posts", auth, "posts")?;
//! let table = builder.build()?;
//!
//! assert_eq!(table.url("edit_post", Some(&url_params! { "id" => 1 })).as_deref(), Some("/posts/1/edit"));
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): registration events through `tracing`
//! - `macros`: the `#[controller]` attribute
//! - `matchit`: `MatchitMatcher` backend for [`RouteTable::recognize`]
//! - `tower`: adapters between handlers and `tower::Service`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use memo_router_core::{
    // Errors
    BoxError,
    // Handlers
    BoxHandler,
    DynHandler,
    Flow,
    Handler,
    HandlerRef,
    IntoFlow,
    // Methods
    Methods,
    // Registry
    Namespace,
    Node,
    ParseMethodError,
    RouteLoadError,
    boxed,
};

pub use memo_router_std::{
    // Resources
    HandlerSource,
    // Matching
    Matcher,
    ParamValue,
    PathMatch,
    REST_MAP,
    Recognized,
    Resolved,
    Resource,
    ResourceArg,
    RestAction,
    // Route table
    Route,
    RouteId,
    RouteMatch,
    RouteOptions,
    RouteTable,
    RouteTableBuilder,
    RouterOptions,
    SegmentMatcher,
    // URLs
    UrlParams,
    resolve,
    resources,
    url_params,
};

#[cfg(feature = "matchit")]
pub use memo_router_std::MatchitMatcher;

#[cfg(feature = "macros")]
pub use memo_router_macros::controller;

/// English inflection used for resource route names.
pub mod inflect {
    pub use memo_router_std::inflect::{pluralize, singularize};
}

/// Handler lookup by dotted path.
pub mod resolver {
    pub use memo_router_std::resolver::{Resolved, lookup, resolve};
}

/// Reverse URL generation.
pub mod url {
    pub use memo_router_std::url::{ParamValue, UrlParams, build, encode_component, template_params};
}

/// Tower adapters.
#[cfg(feature = "tower")]
pub mod tower {
    pub use memo_router_std::tower::{HandlerService, ServiceHandler};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use memo_router_std::testing::*;
}

/// Prelude module - common imports for memo-router.
///
/// # Usage
///
/// ```rust,ignore
/// use memo_router::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Flow, Handler, HandlerRef, Methods, Namespace, Resource, RouteLoadError,
        RouteOptions, RouteTable, RouteTableBuilder, RouterOptions, UrlParams, resources,
        url_params,
    };
}
