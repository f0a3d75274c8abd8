//! The mutable side of the route table.

use super::{
    matcher::{Matcher, SegmentMatcher},
    route::{Route, RouteId, RouteOptions, Routes},
    sealed::RouteTable,
};
use crate::{options::RouterOptions, resolver, url::UrlParams};
use memo_router_core::{HandlerRef, Methods, Namespace, RouteLoadError};
use std::sync::Arc;

/// Collects routes at boot time, then seals them into a [`RouteTable`].
///
/// String handler references are resolved against the registry as each route
/// is registered, so a typo fails at startup rather than at request time.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = RouteTableBuilder::new(registry);
/// builder.get_named("home", "/", ["home"])?;
/// builder.resources(Resource::named("posts", "/posts", "posts"))?;
/// let table = builder.build()?;
/// ```
pub struct RouteTableBuilder<R> {
    registry: Arc<Namespace<R>>,
    options: RouterOptions,
    routes: Routes<R>,
}

macro_rules! verb_helpers {
    ($( $verb:ident, $named:ident => $methods:expr, $label:literal; )*) => {
        $(
            #[doc = concat!("Register an unnamed route answering ", $label, ".")]
            pub fn $verb<I>(&mut self, path: &str, chain: I) -> Result<RouteId, RouteLoadError>
            where
                I: IntoIterator,
                I::Item: Into<HandlerRef<R>>,
            {
                self.register(path, $methods, chain, RouteOptions::new())
            }

            #[doc = concat!("Register a named route answering ", $label, ".")]
            pub fn $named<I>(
                &mut self,
                name: &str,
                path: &str,
                chain: I,
            ) -> Result<RouteId, RouteLoadError>
            where
                I: IntoIterator,
                I::Item: Into<HandlerRef<R>>,
            {
                self.register(path, $methods, chain, RouteOptions::named(name))
            }
        )*
    };
}

impl<R: Send + 'static> RouteTableBuilder<R> {
    /// Create a builder reading handlers from `registry`.
    pub fn new(registry: impl Into<Arc<Namespace<R>>>) -> Self {
        Self::with_options(registry, RouterOptions::default())
    }

    /// Create a builder with router-wide options.
    pub fn with_options(registry: impl Into<Arc<Namespace<R>>>, options: RouterOptions) -> Self {
        Self {
            registry: registry.into(),
            options,
            routes: Routes::new(),
        }
    }

    /// The handler registry string references resolve against.
    pub fn registry(&self) -> &Namespace<R> {
        &self.registry
    }

    /// The router-wide options.
    pub fn router_options(&self) -> &RouterOptions {
        &self.options
    }

    /// Register a route.
    ///
    /// The chain runs in order; string references are looked up in the
    /// registry now and stored as handlers. The router prefix, if any, is
    /// prepended to `path`.
    ///
    /// # Errors
    ///
    /// - [`RouteLoadError::NoMethods`] for an empty method set.
    /// - [`RouteLoadError::EmptyChain`] when `chain` yields nothing.
    /// - [`RouteLoadError::Unresolved`] / [`RouteLoadError::NotCallable`] for
    ///   a bad string reference.
    /// - [`RouteLoadError::DuplicateParam`] for a repeated `:token`.
    /// - [`RouteLoadError::NameConflict`] when the name already labels a
    ///   different template.
    pub fn register<I>(
        &mut self,
        path: &str,
        methods: Methods,
        chain: I,
        options: RouteOptions,
    ) -> Result<RouteId, RouteLoadError>
    where
        I: IntoIterator,
        I::Item: Into<HandlerRef<R>>,
    {
        let chain = chain.into_iter().map(Into::into).collect();
        let route = self.prepare(path, methods, chain, options.name)?;
        Ok(self.commit(route))
    }

    /// Register a single handler using the older argument order, where the
    /// path travels in `options.name` and the route stays unnamed.
    ///
    /// # Errors
    ///
    /// [`RouteLoadError::MissingPath`] when `options.name` is absent, plus
    /// everything [`register`](Self::register) can return.
    pub fn register_legacy(
        &mut self,
        handler: impl Into<HandlerRef<R>>,
        methods: Methods,
        options: RouteOptions,
    ) -> Result<RouteId, RouteLoadError> {
        let handler = handler.into();
        let Some(path) = options.name else {
            return Err(RouteLoadError::MissingPath {
                handler: format!("{:?}", handler),
            });
        };
        self.register(&path, methods, [handler], RouteOptions::new())
    }

    verb_helpers! {
        get, get_named => Methods::GET, "GET";
        post, post_named => Methods::POST, "POST";
        put, put_named => Methods::PUT, "PUT";
        patch, patch_named => Methods::PATCH, "PATCH";
        delete, delete_named => Methods::DELETE, "DELETE";
        del, del_named => Methods::DELETE, "DELETE (alias of `delete`)";
        head, head_named => Methods::HEAD, "HEAD";
        options, options_named => Methods::OPTIONS, "OPTIONS";
        all, all_named => Methods::all(), "every method";
    }

    /// Validate and compile a route without inserting it.
    pub(crate) fn prepare(
        &self,
        path: &str,
        methods: Methods,
        chain: Vec<HandlerRef<R>>,
        name: Option<String>,
    ) -> Result<Route<R>, RouteLoadError> {
        let path = self.options.prefixed(path);
        if methods.is_empty() {
            return Err(RouteLoadError::NoMethods { path });
        }
        if chain.is_empty() {
            return Err(RouteLoadError::EmptyChain { path });
        }

        let chain = resolver::compile_chain(&self.registry, chain)?;
        let route = Route::new(name, methods, path, chain)?;
        self.routes.check_name(&route)?;
        Ok(route)
    }

    /// Insert a route produced by [`prepare`](Self::prepare).
    pub(crate) fn commit(&mut self, route: Route<R>) -> RouteId {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %route.path(),
            methods = %route.methods(),
            name = ?route.name(),
            "registered route"
        );
        self.routes.push(route)
    }

    /// Build a URL for an already registered named route.
    pub fn url(&self, name: &str, params: Option<&UrlParams>) -> Option<String> {
        self.routes.url(name, params)
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route<R>> {
        self.routes.named(name)
    }

    /// Look up a route by the id `register` returned.
    pub fn by_id(&self, id: RouteId) -> Option<&Route<R>> {
        self.routes.by_id(id)
    }

    /// Routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.as_slice().iter()
    }

    /// Number of registered routes, duplicates included.
    pub fn len(&self) -> usize {
        self.routes.as_slice().len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.as_slice().is_empty()
    }

    /// Seal the table using the default [`SegmentMatcher`].
    pub fn build(self) -> Result<RouteTable<R>, RouteLoadError> {
        self.build_with::<SegmentMatcher>()
    }

    /// Seal the table using matcher `M`.
    ///
    /// # Errors
    ///
    /// [`RouteLoadError::Matcher`] when the matcher rejects a template.
    pub fn build_with<M: Matcher>(self) -> Result<RouteTable<R, M>, RouteLoadError> {
        RouteTable::seal(self.routes, self.options)
    }
}
