//! Compiled routes and the ordered, name-indexed collection that holds them.

use crate::url::{self, UrlParams};
use memo_router_core::{BoxHandler, Methods, RouteLoadError};
use std::{collections::HashMap, fmt};

/// A registered route. Immutable once it is in a table.
pub struct Route<R> {
    name: Option<String>,
    methods: Methods,
    path: String,
    params: Vec<String>,
    chain: Vec<BoxHandler<R>>,
}

impl<R> Route<R> {
    /// Validate a template and assemble a route from an already compiled chain.
    pub(crate) fn new(
        name: Option<String>,
        methods: Methods,
        path: String,
        chain: Vec<BoxHandler<R>>,
    ) -> Result<Self, RouteLoadError> {
        if methods.is_empty() {
            return Err(RouteLoadError::NoMethods { path });
        }
        if chain.is_empty() {
            return Err(RouteLoadError::EmptyChain { path });
        }

        let params = url::template_params(&path);
        for (i, param) in params.iter().enumerate() {
            if params[..i].contains(param) {
                return Err(RouteLoadError::DuplicateParam {
                    path,
                    param: param.clone(),
                });
            }
        }

        Ok(Self {
            name,
            methods,
            path,
            params,
            chain,
        })
    }

    /// The route name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The HTTP verbs this route answers to.
    pub fn methods(&self) -> Methods {
        self.methods
    }

    /// The path template, e.g. `/posts/:id/edit`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Placeholder names in template order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The compiled handler chain: shared middleware first, action last.
    pub fn chain(&self) -> &[BoxHandler<R>] {
        &self.chain
    }

    /// Build a URL for this route.
    pub fn url(&self, params: Option<&UrlParams>) -> String {
        url::build(&self.path, params)
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("methods", &self.methods)
            .field("path", &self.path)
            .field("chain", &self.chain.len())
            .finish()
    }
}

/// Handle to a registered route: its position in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Position of the route in registration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Per-route registration options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Name for reverse URL generation.
    pub name: Option<String>,
}

impl RouteOptions {
    /// Options for an unnamed route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a named route.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Routes in registration order plus the name index.
///
/// Duplicates are kept; the index points at the most recent route with a
/// given name.
pub(crate) struct Routes<R> {
    routes: Vec<Route<R>>,
    names: HashMap<String, usize>,
}

impl<R> Routes<R> {
    pub(crate) fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Reject `route` if its name already labels a different template.
    pub(crate) fn check_name(&self, route: &Route<R>) -> Result<(), RouteLoadError> {
        let Some(name) = route.name() else {
            return Ok(());
        };
        match self.named(name) {
            Some(existing) if existing.path() != route.path() => Err(RouteLoadError::NameConflict {
                name: name.to_string(),
                existing: existing.path().to_string(),
                path: route.path().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Append without checks; callers run [`Routes::check_name`] first.
    pub(crate) fn push(&mut self, route: Route<R>) -> RouteId {
        let index = self.routes.len();
        if let Some(name) = route.name() {
            self.names.insert(name.to_string(), index);
        }
        self.routes.push(route);
        RouteId(index)
    }

    pub(crate) fn named(&self, name: &str) -> Option<&Route<R>> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    pub(crate) fn by_id(&self, id: RouteId) -> Option<&Route<R>> {
        self.routes.get(id.0)
    }

    pub(crate) fn as_slice(&self) -> &[Route<R>] {
        &self.routes
    }

    pub(crate) fn named_count(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn url(&self, name: &str, params: Option<&UrlParams>) -> Option<String> {
        match self.named(name) {
            Some(route) => Some(route.url(params)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(name = %name, "url requested for unknown route name");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::noop;

    fn route(name: Option<&str>, path: &str) -> Route<()> {
        Route::new(name.map(String::from), Methods::GET, path.to_string(), vec![noop()]).unwrap()
    }

    #[test]
    fn test_route_validation() {
        let err = Route::<()>::new(None, Methods::empty(), "/a".into(), vec![noop()]).unwrap_err();
        assert_eq!(err, RouteLoadError::NoMethods { path: "/a".into() });

        let err = Route::<()>::new(None, Methods::GET, "/a".into(), vec![]).unwrap_err();
        assert_eq!(err, RouteLoadError::EmptyChain { path: "/a".into() });

        let err =
            Route::<()>::new(None, Methods::GET, "/a/:id/b/:id".into(), vec![noop()]).unwrap_err();
        assert_eq!(
            err,
            RouteLoadError::DuplicateParam {
                path: "/a/:id/b/:id".into(),
                param: "id".into()
            }
        );
    }

    #[test]
    fn test_params_in_order() {
        let route = route(None, "/users/:user_id/posts/:id");
        assert_eq!(route.params(), ["user_id", "id"]);
    }

    #[test]
    fn test_last_name_wins() {
        let mut routes = Routes::new();
        let first = routes.push(route(Some("post"), "/posts/:id"));
        let second = routes.push(route(Some("post"), "/posts/:id"));
        assert_ne!(first, second);
        assert_eq!(routes.as_slice().len(), 2);
        assert!(std::ptr::eq(routes.named("post").unwrap(), routes.by_id(second).unwrap()));
    }

    #[test]
    fn test_name_conflict() {
        let mut routes = Routes::new();
        routes.push(route(Some("post"), "/posts/:id"));

        assert!(routes.check_name(&route(Some("post"), "/posts/:id")).is_ok());
        assert!(routes.check_name(&route(None, "/articles/:id")).is_ok());
        assert_eq!(
            routes.check_name(&route(Some("post"), "/articles/:id")),
            Err(RouteLoadError::NameConflict {
                name: "post".into(),
                existing: "/posts/:id".into(),
                path: "/articles/:id".into(),
            })
        );
    }

    #[test]
    fn test_unknown_name() {
        let routes: Routes<()> = Routes::new();
        assert_eq!(routes.url("nonexistent_route", None), None);
    }
}
