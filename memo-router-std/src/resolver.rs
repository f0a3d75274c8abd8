//! Dotted-path lookup in the handler registry.
//!
//! `"user.profile.show"` descends into `user`, then `profile`, and must end on
//! a handler. A missing segment anywhere is a miss; there is no fallback that
//! retries with segments joined back together.

use memo_router_core::{BoxHandler, HandlerRef, Namespace, Node, RouteLoadError};
use std::{fmt, sync::Arc};

/// Result of resolving a dotted reference.
pub enum Resolved<'a, R> {
    /// The reference names a handler.
    Found(&'a BoxHandler<R>),
    /// Nothing callable lives at that path.
    NotFound,
}

impl<'a, R> Resolved<'a, R> {
    /// Returns true if a handler was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// Returns the handler, if any.
    pub fn found(self) -> Option<&'a BoxHandler<R>> {
        match self {
            Resolved::Found(handler) => Some(handler),
            Resolved::NotFound => None,
        }
    }
}

impl<R> fmt::Debug for Resolved<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Found(_) => f.write_str("Found(<handler>)"),
            Resolved::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Walk `dotted` through `registry` and return whatever node it ends on.
pub fn lookup<'a, R>(registry: &'a Namespace<R>, dotted: &str) -> Option<&'a Node<R>> {
    let mut segments = dotted.split('.');
    let first = segments.next()?;
    segments.try_fold(registry.get(first)?, |node, segment| {
        node.as_namespace()?.get(segment)
    })
}

/// Resolve `dotted` to a handler.
pub fn resolve<'a, R>(registry: &'a Namespace<R>, dotted: &str) -> Resolved<'a, R> {
    match lookup(registry, dotted).and_then(Node::as_handler) {
        Some(handler) => Resolved::Found(handler),
        None => Resolved::NotFound,
    }
}

/// Turn a node taken from the registry into a handler, naming `reference` in
/// the error when it is absent or is a namespace.
pub(crate) fn node_to_handler<R>(
    node: Option<&Node<R>>,
    reference: &str,
) -> Result<BoxHandler<R>, RouteLoadError> {
    match node {
        Some(Node::Handler(handler)) => Ok(Arc::clone(handler)),
        Some(Node::Namespace(_)) => Err(RouteLoadError::NotCallable {
            reference: reference.to_string(),
        }),
        None => Err(RouteLoadError::Unresolved {
            reference: reference.to_string(),
        }),
    }
}

/// Compile one chain element against the registry.
pub(crate) fn compile<R>(
    registry: &Namespace<R>,
    handler: HandlerRef<R>,
) -> Result<BoxHandler<R>, RouteLoadError> {
    match handler {
        HandlerRef::Direct(handler) => Ok(handler),
        HandlerRef::Named(reference) => node_to_handler(lookup(registry, &reference), &reference),
    }
}

/// Compile a whole chain, stopping at the first unresolved reference.
pub(crate) fn compile_chain<R>(
    registry: &Namespace<R>,
    chain: Vec<HandlerRef<R>>,
) -> Result<Vec<BoxHandler<R>>, RouteLoadError> {
    chain
        .into_iter()
        .map(|handler| compile(registry, handler))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_namespace;

    #[test]
    fn test_resolve_nested() {
        let registry: Namespace<u32> = sample_namespace();
        assert!(resolve(&registry, "user.profile.show").is_found());
        assert!(resolve(&registry, "posts.index").is_found());
        assert!(resolve(&registry, "home").is_found());
    }

    #[test]
    fn test_resolve_misses() {
        let registry: Namespace<u32> = sample_namespace();
        assert!(!resolve(&registry, "missing.action").is_found());
        assert!(!resolve(&registry, "posts.missing").is_found());
        assert!(!resolve(&registry, "").is_found());
        assert!(!resolve(&registry, "posts..index").is_found());
        // Descending through a handler is a miss, not a panic.
        assert!(!resolve(&registry, "home.index").is_found());
    }

    #[test]
    fn test_namespace_is_not_callable() {
        let registry: Namespace<u32> = sample_namespace();
        assert!(lookup(&registry, "user.profile").is_some());
        assert!(!resolve(&registry, "user.profile").is_found());
    }

    #[test]
    fn test_no_segment_remerging() {
        // Keys containing a dot cannot be reached by a dotted reference.
        let registry: Namespace<u32> =
            Namespace::new().namespace("admin", Namespace::new().handler("users.list", |_: u32| async {}));
        assert!(!resolve(&registry, "admin.users.list").is_found());
    }

    #[test]
    fn test_compile_errors_name_reference() {
        let registry: Namespace<u32> = sample_namespace();
        let err = compile(&registry, HandlerRef::named("missing.action")).err();
        assert_eq!(
            err,
            Some(RouteLoadError::Unresolved {
                reference: "missing.action".into()
            })
        );

        let err = compile(&registry, HandlerRef::named("user.profile")).err();
        assert_eq!(
            err,
            Some(RouteLoadError::NotCallable {
                reference: "user.profile".into()
            })
        );
    }

    #[test]
    fn test_compile_returns_registered_handler() {
        let registry: Namespace<u32> = sample_namespace();
        let expected = resolve(&registry, "posts.show").found().unwrap();
        let compiled = compile(&registry, HandlerRef::named("posts.show")).unwrap();
        assert!(Arc::ptr_eq(expected, &compiled));
    }
}
