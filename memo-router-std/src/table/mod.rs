//! # Route table
//!
//! Routes are collected in a [`RouteTableBuilder`] at boot time and sealed
//! into a read-only [`RouteTable`].
//!
//! ```text
//! RouteTableBuilder ──build()──► RouteTable ──wraps──► Matcher
//!   register / resources           url / route / recognize
//! ```
//!
//! Both sides keep routes in registration order with a name index. A name
//! may be reused only for the same template; the index follows the most
//! recent registration.

mod builder;
mod matcher;
mod route;
mod sealed;

pub use builder::RouteTableBuilder;
#[cfg(feature = "matchit")]
pub use matcher::MatchitMatcher;
pub use matcher::{Matcher, PathMatch, SegmentMatcher};
pub use route::{Route, RouteId, RouteOptions};
pub use sealed::{Recognized, RouteMatch, RouteTable};
