//! The handler registry: a tree of named handlers.
//!
//! Controllers are grouped into nested namespaces, so `posts.index` is the
//! `index` handler inside the `posts` namespace and `user.profile.show` sits
//! two levels down. The routing layer only ever reads this tree.

use crate::handler::{BoxHandler, Handler, boxed};
use std::{collections::BTreeMap, fmt, sync::Arc};

/// An entry in a [`Namespace`].
pub enum Node<R> {
    /// A callable leaf.
    Handler(BoxHandler<R>),
    /// A nested namespace.
    Namespace(Namespace<R>),
}

impl<R> Node<R> {
    /// The handler, if this node is a leaf.
    pub fn as_handler(&self) -> Option<&BoxHandler<R>> {
        match self {
            Node::Handler(handler) => Some(handler),
            Node::Namespace(_) => None,
        }
    }

    /// The nested namespace, if this node is one.
    pub fn as_namespace(&self) -> Option<&Namespace<R>> {
        match self {
            Node::Namespace(namespace) => Some(namespace),
            Node::Handler(_) => None,
        }
    }
}

impl<R> Clone for Node<R> {
    fn clone(&self) -> Self {
        match self {
            Node::Handler(handler) => Node::Handler(Arc::clone(handler)),
            Node::Namespace(namespace) => Node::Namespace(namespace.clone()),
        }
    }
}

impl<R> fmt::Debug for Node<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Handler(_) => f.write_str("<handler>"),
            Node::Namespace(namespace) => namespace.fmt(f),
        }
    }
}

/// A mapping from keys to handlers or nested namespaces.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Namespace::new()
///     .namespace("posts", Namespace::new()
///         .handler("index", posts::index)
///         .handler("show", posts::show))
///     .namespace("user", Namespace::new()
///         .namespace("profile", Namespace::new().handler("show", profile::show)));
/// ```
pub struct Namespace<R> {
    entries: BTreeMap<String, Node<R>>,
}

impl<R> Namespace<R> {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a nested namespace (builder form).
    pub fn namespace(mut self, key: impl Into<String>, namespace: Namespace<R>) -> Self {
        self.insert_namespace(key, namespace);
        self
    }

    /// Add a nested namespace. Replaces any existing entry under `key`.
    pub fn insert_namespace(&mut self, key: impl Into<String>, namespace: Namespace<R>) {
        self.entries.insert(key.into(), Node::Namespace(namespace));
    }

    /// Add an already boxed handler. Replaces any existing entry under `key`.
    pub fn insert_boxed(&mut self, key: impl Into<String>, handler: BoxHandler<R>) {
        self.entries.insert(key.into(), Node::Handler(handler));
    }

    /// Look up a direct child.
    pub fn get(&self, key: &str) -> Option<&Node<R>> {
        self.entries.get(key)
    }

    /// Iterate over the direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node<R>)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the namespace has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Send + 'static> Namespace<R> {
    /// Add a handler (builder form).
    pub fn handler<H: Handler<R>>(mut self, key: impl Into<String>, handler: H) -> Self {
        self.insert_handler(key, handler);
        self
    }

    /// Add a handler. Replaces any existing entry under `key`.
    pub fn insert_handler<H: Handler<R>>(&mut self, key: impl Into<String>, handler: H) {
        self.insert_boxed(key, boxed(handler));
    }
}

impl<R> Default for Namespace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Namespace<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R> fmt::Debug for Namespace<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
