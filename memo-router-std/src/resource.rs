//! # Resource routes
//!
//! One resource declaration expands into seven conventional routes:
//!
//! | action  | method | path            | name        |
//! |---------|--------|-----------------|-------------|
//! | index   | GET    | `/posts`        | `posts`     |
//! | new     | GET    | `/posts/new`    | `new_post`  |
//! | create  | POST   | `/posts`        | `posts`     |
//! | show    | GET    | `/posts/:id`    | `post`      |
//! | edit    | GET    | `/posts/:id/edit` | `edit_post` |
//! | update  | PUT    | `/posts/:id`    | `post`      |
//! | destroy | DELETE | `/posts/:id`    | `destroy_post` |
//!
//! When the plural and singular forms coincide (`sheep`, `news`) the
//! collection routes are named `sheep_index` so they stay apart from the
//! member routes.
//!
//! Names are only assigned when the resource is named. Each action handler is
//! taken from the source (`"posts.show"` for a string source, `ns["show"]`
//! for a namespace) and appended to the shared middleware.

use crate::{
    inflect,
    options::join_path,
    resolver,
    table::{Route, RouteId, RouteTableBuilder},
};
use memo_router_core::{BoxHandler, HandlerRef, Methods, Namespace, RouteLoadError};
use std::fmt;

/// Whether an action addresses the whole collection or one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `/posts`, `/posts/new`
    Collection,
    /// `/posts/:id`, `/posts/:id/edit`
    Member,
}

/// Grammatical number used for an action's route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    /// `posts`
    Plural,
    /// `post`
    Singular,
}

/// One row of the REST convention table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestAction {
    /// Action key looked up in the handler source.
    pub action: &'static str,
    /// HTTP verb of the route.
    pub method: Methods,
    /// Path suffix joined onto the resource prefix.
    pub suffix: &'static str,
    /// Collection or member route.
    pub scope: Scope,
    /// Number of the route name.
    pub form: NameForm,
    /// Prepended to the inflected name.
    pub name_prefix: &'static str,
}

impl RestAction {
    /// The route name for a resource called `resource`.
    ///
    /// A plural name that equals the singular gets an `_index` suffix.
    pub fn route_name(&self, resource: &str) -> String {
        let inflected = match self.form {
            NameForm::Plural => {
                let plural = inflect::pluralize(resource);
                if plural == inflect::singularize(resource) {
                    format!("{}_index", plural)
                } else {
                    plural
                }
            }
            NameForm::Singular => inflect::singularize(resource),
        };
        format!("{}{}", self.name_prefix, inflected)
    }
}

/// The convention table, in registration order.
pub const REST_MAP: [RestAction; 7] = [
    RestAction {
        action: "index",
        method: Methods::GET,
        suffix: "",
        scope: Scope::Collection,
        form: NameForm::Plural,
        name_prefix: "",
    },
    RestAction {
        action: "new",
        method: Methods::GET,
        suffix: "new",
        scope: Scope::Collection,
        form: NameForm::Singular,
        name_prefix: "new_",
    },
    RestAction {
        action: "create",
        method: Methods::POST,
        suffix: "",
        scope: Scope::Collection,
        form: NameForm::Plural,
        name_prefix: "",
    },
    RestAction {
        action: "show",
        method: Methods::GET,
        suffix: ":id",
        scope: Scope::Member,
        form: NameForm::Singular,
        name_prefix: "",
    },
    RestAction {
        action: "edit",
        method: Methods::GET,
        suffix: ":id/edit",
        scope: Scope::Member,
        form: NameForm::Singular,
        name_prefix: "edit_",
    },
    RestAction {
        action: "update",
        method: Methods::PUT,
        suffix: ":id",
        scope: Scope::Member,
        form: NameForm::Singular,
        name_prefix: "",
    },
    RestAction {
        action: "destroy",
        method: Methods::DELETE,
        suffix: ":id",
        scope: Scope::Member,
        form: NameForm::Singular,
        name_prefix: "destroy_",
    },
];

/// Where a resource's action handlers come from.
pub enum HandlerSource<R> {
    /// Dotted prefix into the builder's registry; `"posts"` means `posts.index`, ...
    Named(String),
    /// A namespace keyed by action.
    Namespace(Namespace<R>),
}

impl<R> From<&str> for HandlerSource<R> {
    fn from(value: &str) -> Self {
        HandlerSource::Named(value.to_string())
    }
}

impl<R> From<String> for HandlerSource<R> {
    fn from(value: String) -> Self {
        HandlerSource::Named(value)
    }
}

impl<R> From<Namespace<R>> for HandlerSource<R> {
    fn from(value: Namespace<R>) -> Self {
        HandlerSource::Namespace(value)
    }
}

impl<R> fmt::Debug for HandlerSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerSource::Named(prefix) => f.debug_tuple("Named").field(prefix).finish(),
            HandlerSource::Namespace(ns) => f.debug_tuple("Namespace").field(ns).finish(),
        }
    }
}

/// A resource declaration.
///
/// # Example
///
/// ```rust,ignore
/// let posts = Resource::named("posts", "/posts", "posts").middleware(auth);
/// builder.resources(posts)?;
/// ```
pub struct Resource<R> {
    name: Option<String>,
    prefix: String,
    middleware: Vec<HandlerRef<R>>,
    source: HandlerSource<R>,
}

impl<R> Resource<R> {
    /// An unnamed resource: routes are registered without names.
    pub fn new(prefix: impl Into<String>, source: impl Into<HandlerSource<R>>) -> Self {
        Self {
            name: None,
            prefix: prefix.into(),
            middleware: Vec::new(),
            source: source.into(),
        }
    }

    /// A named resource.
    pub fn named(
        name: impl Into<String>,
        prefix: impl Into<String>,
        source: impl Into<HandlerSource<R>>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(prefix, source)
        }
    }

    /// Append a shared middleware; it runs before every action handler.
    pub fn middleware(mut self, handler: impl Into<HandlerRef<R>>) -> Self {
        self.middleware.push(handler.into());
        self
    }

    /// Build a resource from positional arguments.
    ///
    /// - `(prefix, source)`
    /// - `(name, prefix, middleware..., source)`
    ///
    /// The last argument is always the source: a dotted prefix or a
    /// namespace.
    ///
    /// # Errors
    ///
    /// [`RouteLoadError::InvalidArguments`] for fewer than two arguments, a
    /// non-string name or prefix, a handler in source position, or a
    /// namespace in middleware position.
    pub fn from_args(mut args: Vec<ResourceArg<R>>) -> Result<Self, RouteLoadError> {
        if args.len() < 2 {
            return Err(RouteLoadError::InvalidArguments(format!(
                "expected at least a prefix and a handler source, got {} argument(s)",
                args.len()
            )));
        }

        let source = match args.pop() {
            Some(ResourceArg::Text(prefix)) => HandlerSource::Named(prefix),
            Some(ResourceArg::Namespace(ns)) => HandlerSource::Namespace(ns),
            _ => {
                return Err(RouteLoadError::InvalidArguments(
                    "the last argument must be a dotted prefix or a namespace".to_string(),
                ));
            }
        };

        let mut args = args.into_iter();
        let (name, prefix) = if args.len() == 1 {
            (None, expect_text(args.next(), "prefix")?)
        } else {
            let name = expect_text(args.next(), "name")?;
            (Some(name), expect_text(args.next(), "prefix")?)
        };

        let middleware = args
            .map(|arg| match arg {
                ResourceArg::Text(reference) => Ok(HandlerRef::Named(reference)),
                ResourceArg::Handler(handler) => Ok(HandlerRef::Direct(handler)),
                ResourceArg::Namespace(_) => Err(RouteLoadError::InvalidArguments(
                    "a namespace is only accepted as the last argument".to_string(),
                )),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            name,
            prefix,
            middleware,
            source,
        })
    }

    /// The resource name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The shared middleware, in order.
    pub fn middleware_chain(&self) -> &[HandlerRef<R>] {
        &self.middleware
    }

    /// The handler source.
    pub fn source(&self) -> &HandlerSource<R> {
        &self.source
    }

    /// Path of `action` under this resource.
    pub fn path_for(&self, action: &RestAction) -> String {
        join_path(&self.prefix, action.suffix)
    }
}

impl<R> fmt::Debug for Resource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .field("middleware", &self.middleware)
            .field("source", &self.source)
            .finish()
    }
}

fn expect_text<R>(arg: Option<ResourceArg<R>>, position: &str) -> Result<String, RouteLoadError> {
    match arg {
        Some(ResourceArg::Text(text)) => Ok(text),
        _ => Err(RouteLoadError::InvalidArguments(format!(
            "the {} must be a string",
            position
        ))),
    }
}

/// A positional argument to [`Resource::from_args`].
pub enum ResourceArg<R> {
    /// A name, prefix, dotted reference or dotted source prefix.
    Text(String),
    /// A concrete middleware handler.
    Handler(BoxHandler<R>),
    /// A namespace source.
    Namespace(Namespace<R>),
}

impl<R> From<&str> for ResourceArg<R> {
    fn from(value: &str) -> Self {
        ResourceArg::Text(value.to_string())
    }
}

impl<R> From<String> for ResourceArg<R> {
    fn from(value: String) -> Self {
        ResourceArg::Text(value)
    }
}

impl<R> From<BoxHandler<R>> for ResourceArg<R> {
    fn from(value: BoxHandler<R>) -> Self {
        ResourceArg::Handler(value)
    }
}

impl<R> From<Namespace<R>> for ResourceArg<R> {
    fn from(value: Namespace<R>) -> Self {
        ResourceArg::Namespace(value)
    }
}

impl<R: Send + 'static> RouteTableBuilder<R> {
    /// Register the seven conventional routes of `resource`.
    ///
    /// Either every route is registered or none is: all seven are compiled
    /// first, and the first failure is returned with the table untouched.
    ///
    /// # Errors
    ///
    /// Anything [`register`](Self::register) can return, naming the first
    /// action or middleware reference that failed.
    pub fn resources(&mut self, resource: Resource<R>) -> Result<Vec<RouteId>, RouteLoadError> {
        let mut prepared: Vec<Route<R>> = Vec::with_capacity(REST_MAP.len());

        for row in &REST_MAP {
            let action = match &resource.source {
                HandlerSource::Named(prefix) => HandlerRef::Named(format!("{}.{}", prefix, row.action)),
                HandlerSource::Namespace(ns) => {
                    HandlerRef::Direct(resolver::node_to_handler(ns.get(row.action), row.action)?)
                }
            };

            let mut chain = resource.middleware.clone();
            chain.push(action);

            let name = resource.name.as_deref().map(|name| row.route_name(name));
            let route = self.prepare(&resource.path_for(row), row.method, chain, name)?;
            check_batch_name(&prepared, &route)?;
            prepared.push(route);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            prefix = %resource.prefix,
            name = ?resource.name,
            routes = prepared.len(),
            "registered resource"
        );

        Ok(prepared.into_iter().map(|route| self.commit(route)).collect())
    }
}

/// Names within one resource must also agree on their template.
fn check_batch_name<R>(prepared: &[Route<R>], route: &Route<R>) -> Result<(), RouteLoadError> {
    let Some(name) = route.name() else {
        return Ok(());
    };
    match prepared
        .iter()
        .find(|other| other.name() == Some(name) && other.path() != route.path())
    {
        Some(existing) => Err(RouteLoadError::NameConflict {
            name: name.to_string(),
            existing: existing.path().to_string(),
            path: route.path().to_string(),
        }),
        None => Ok(()),
    }
}
