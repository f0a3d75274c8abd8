//! The read-only route table produced by [`RouteTableBuilder::build`].
//!
//! [`RouteTableBuilder::build`]: super::RouteTableBuilder::build

use super::{
    matcher::{Matcher, SegmentMatcher},
    route::{Route, RouteId, Routes},
};
use crate::{options::RouterOptions, url::UrlParams};
use memo_router_core::{Methods, RouteLoadError};
use percent_encoding::percent_decode_str;
use std::{collections::HashMap, fmt};

/// A sealed route table.
///
/// Immutable and `Send + Sync`; share it behind an `Arc` or a `static`.
pub struct RouteTable<R, M = SegmentMatcher> {
    routes: Routes<R>,
    groups: Vec<Vec<usize>>,
    matcher: M,
    options: RouterOptions,
}

/// Outcome of [`RouteTable::recognize`].
pub enum Recognized<'a, R> {
    /// A route answers this method and path.
    Matched(RouteMatch<'a, R>),
    /// The path matched but no route accepts the method; carries the
    /// methods that would have been accepted.
    MethodNotAllowed(Methods),
    /// No template matches the path.
    NotFound,
}

impl<'a, R> Recognized<'a, R> {
    /// Returns the match, if any.
    pub fn matched(self) -> Option<RouteMatch<'a, R>> {
        match self {
            Recognized::Matched(m) => Some(m),
            _ => None,
        }
    }
}

impl<R> fmt::Debug for Recognized<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognized::Matched(m) => f.debug_tuple("Matched").field(m).finish(),
            Recognized::MethodNotAllowed(allowed) => {
                f.debug_tuple("MethodNotAllowed").field(allowed).finish()
            }
            Recognized::NotFound => f.write_str("NotFound"),
        }
    }
}

/// A recognised route with its decoded path parameters.
pub struct RouteMatch<'a, R> {
    /// The matching route.
    pub route: &'a Route<R>,
    /// `(name, value)` pairs in template order, percent-decoded.
    pub params: Vec<(String, String)>,
}

impl<R> RouteMatch<'_, R> {
    /// Value of a path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<R> fmt::Debug for RouteMatch<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", self.route)
            .field("params", &self.params)
            .finish()
    }
}

impl<R, M: Matcher> RouteTable<R, M> {
    pub(crate) fn seal(routes: Routes<R>, options: RouterOptions) -> Result<Self, RouteLoadError> {
        let mut matcher = M::new(&options);
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut by_template: HashMap<&str, usize> = HashMap::new();

        for (index, route) in routes.as_slice().iter().enumerate() {
            match by_template.get(route.path()) {
                Some(&group) => groups[group].push(index),
                None => {
                    let group = groups.len();
                    matcher.insert(route.path(), group)?;
                    by_template.insert(route.path(), group);
                    groups.push(vec![index]);
                }
            }
        }
        drop(by_template);

        #[cfg(feature = "tracing")]
        tracing::info!(
            routes = routes.as_slice().len(),
            named = routes.named_count(),
            templates = groups.len(),
            "route table sealed"
        );

        Ok(Self {
            routes,
            groups,
            matcher,
            options,
        })
    }

    /// Build a URL for the named route.
    ///
    /// Returns `None` when no route has that name.
    pub fn url(&self, name: &str, params: Option<&UrlParams>) -> Option<String> {
        self.routes.url(name, params)
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route<R>> {
        self.routes.named(name)
    }

    /// Look up a route by id.
    pub fn by_id(&self, id: RouteId) -> Option<&Route<R>> {
        self.routes.by_id(id)
    }

    /// Routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.as_slice().iter()
    }

    /// Number of routes, duplicates included.
    pub fn len(&self) -> usize {
        self.routes.as_slice().len()
    }

    /// Returns true if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.as_slice().is_empty()
    }

    /// The options the table was built with.
    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Find the route that answers `method` on `path`.
    ///
    /// Routes sharing a template are tried in registration order.
    pub fn recognize(&self, method: Methods, path: &str) -> Recognized<'_, R> {
        let Some(found) = self.matcher.at(path) else {
            return Recognized::NotFound;
        };
        let Some(group) = self.groups.get(found.group) else {
            return Recognized::NotFound;
        };

        let routes = self.routes.as_slice();
        let mut allowed = Methods::empty();
        for &index in group {
            let route = &routes[index];
            if route.methods().contains(method) {
                let params = found
                    .params
                    .into_iter()
                    .map(|(k, v)| {
                        let v = percent_decode_str(&v).decode_utf8_lossy().into_owned();
                        (k, v)
                    })
                    .collect();
                return Recognized::Matched(RouteMatch { route, params });
            }
            allowed |= route.methods();
        }
        Recognized::MethodNotAllowed(allowed)
    }
}

impl<R, M> fmt::Debug for RouteTable<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes.as_slice())
            .field("options", &self.options)
            .finish()
    }
}
