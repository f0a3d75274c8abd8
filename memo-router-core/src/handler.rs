//! # Handlers
//!
//! A route's handler chain is an ordered list of opaque callables. The routing
//! layer never runs them; it only stores them, compiles dotted references into
//! them and hands them back to whatever serves requests.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure or `async fn`**: `|req: Req| async move { ... }`
//! 2. **Struct implementation**: `impl Handler<Req> for Auth`
//! 3. **Dotted reference**: `HandlerRef::from("posts.index")`, resolved against
//!    a [`Namespace`](crate::Namespace) when the route is registered

use crate::error::BoxError;
use futures::future::BoxFuture;
use std::{fmt, future::Future, sync::Arc};

/// What a handler asks of the chain once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next handler in the chain.
    Next,
    /// The request is answered; skip the rest of the chain.
    Halt,
}

/// Conversion of a handler's return value into a [`Flow`].
///
/// - `()` → `Flow::Next`
/// - `Flow` → as is
/// - `Result<T, E>` → delegates to `T` or propagates `E`
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a `Flow`",
    label = "handler return type must implement `IntoFlow`",
    note = "Return `()`, `Flow`, or `Result<_, E>` where `E: Into<BoxError>`."
)]
pub trait IntoFlow {
    /// Convert the output.
    fn into_flow(self) -> Result<Flow, BoxError>;
}

impl IntoFlow for () {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(Flow::Next)
    }
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoFlow for Result<T, E>
where
    T: IntoFlow,
    E: Into<BoxError>,
{
    fn into_flow(self) -> Result<Flow, BoxError> {
        match self {
            Ok(t) => t.into_flow(),
            Err(e) => Err(e.into()),
        }
    }
}

/// A callable stored in a route's handler chain.
///
/// `R` is the request (or context) type of the serving layer; the routing
/// layer treats it as opaque.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `Handler<{R}>` implementation",
    note = "Implement `Handler<{R}>` or use a closure `Fn({R}) -> impl Future`."
)]
pub trait Handler<R>: Send + Sync + 'static {
    /// Run the handler.
    fn call(&self, req: R) -> impl Future<Output = Result<Flow, BoxError>> + Send;
}

// Blanket impl for closures and async fns
impl<F, R, Fut> Handler<R> for F
where
    R: Send + 'static,
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future + Send,
    Fut::Output: IntoFlow,
{
    fn call(&self, req: R) -> impl Future<Output = Result<Flow, BoxError>> + Send {
        let fut = (self)(req);
        async move { fut.await.into_flow() }
    }
}

/// Object-safe version of [`Handler`].
///
/// Handler chains hold heterogeneous handlers, so they are stored as
/// [`BoxHandler`]s.
pub trait DynHandler<R>: Send + Sync + 'static {
    /// Run the handler (dynamic dispatch version).
    fn call_dyn(&self, req: R) -> BoxFuture<'_, Result<Flow, BoxError>>;
}

impl<R, H> DynHandler<R> for H
where
    R: Send + 'static,
    H: Handler<R>,
{
    fn call_dyn(&self, req: R) -> BoxFuture<'_, Result<Flow, BoxError>> {
        Box::pin(self.call(req))
    }
}

/// A shared, type-erased handler.
pub type BoxHandler<R> = Arc<dyn DynHandler<R>>;

/// Erase a handler into a [`BoxHandler`].
pub fn boxed<R, H>(handler: H) -> BoxHandler<R>
where
    R: Send + 'static,
    H: Handler<R>,
{
    Arc::new(handler)
}

/// One element of a handler chain as supplied at registration time.
///
/// `Named` references are compiled into `Direct` handlers exactly once, when
/// the route is registered. Nothing is looked up by name afterwards.
pub enum HandlerRef<R> {
    /// A concrete handler.
    Direct(BoxHandler<R>),
    /// A dotted path into the handler registry, e.g. `"user.profile.show"`.
    Named(String),
}

impl<R: Send + 'static> HandlerRef<R> {
    /// Wrap a concrete handler.
    pub fn direct<H: Handler<R>>(handler: H) -> Self {
        HandlerRef::Direct(boxed(handler))
    }
}

impl<R> HandlerRef<R> {
    /// Create a dotted reference.
    pub fn named(reference: impl Into<String>) -> Self {
        HandlerRef::Named(reference.into())
    }

    /// The dotted reference, if this is one.
    pub fn reference(&self) -> Option<&str> {
        match self {
            HandlerRef::Named(reference) => Some(reference),
            HandlerRef::Direct(_) => None,
        }
    }
}

impl<R> Clone for HandlerRef<R> {
    fn clone(&self) -> Self {
        match self {
            HandlerRef::Direct(handler) => HandlerRef::Direct(Arc::clone(handler)),
            HandlerRef::Named(reference) => HandlerRef::Named(reference.clone()),
        }
    }
}

impl<R> fmt::Debug for HandlerRef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerRef::Direct(_) => f.write_str("Direct(<handler>)"),
            HandlerRef::Named(reference) => f.debug_tuple("Named").field(reference).finish(),
        }
    }
}

impl<R> From<&str> for HandlerRef<R> {
    fn from(reference: &str) -> Self {
        HandlerRef::Named(reference.to_string())
    }
}

impl<R> From<String> for HandlerRef<R> {
    fn from(reference: String) -> Self {
        HandlerRef::Named(reference)
    }
}

impl<R> From<BoxHandler<R>> for HandlerRef<R> {
    fn from(handler: BoxHandler<R>) -> Self {
        HandlerRef::Direct(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failure;

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failure")
        }
    }

    impl std::error::Error for Failure {}

    struct Halting;

    impl Handler<u32> for Halting {
        async fn call(&self, _req: u32) -> Result<Flow, BoxError> {
            Ok(Flow::Halt)
        }
    }

    #[tokio::test]
    async fn test_closure_unit_output_continues() {
        let handler = boxed(|_req: u32| async {});
        assert_eq!(handler.call_dyn(1).await.unwrap(), Flow::Next);
    }

    #[tokio::test]
    async fn test_struct_handler() {
        let handler = boxed(Halting);
        assert_eq!(handler.call_dyn(1).await.unwrap(), Flow::Halt);
    }

    #[tokio::test]
    async fn test_result_error_propagates() {
        let handler = boxed(|req: u32| async move {
            if req == 0 { Err(Failure) } else { Ok(Flow::Next) }
        });
        let err = handler.call_dyn(0).await.unwrap_err();
        assert_eq!(err.to_string(), "failure");
        assert_eq!(handler.call_dyn(7).await.unwrap(), Flow::Next);
    }

    #[test]
    fn test_handler_ref_conversions() {
        let named: HandlerRef<u32> = "posts.index".into();
        assert_eq!(named.reference(), Some("posts.index"));
        assert_eq!(format!("{:?}", named), "Named(\"posts.index\")");

        let direct: HandlerRef<u32> = HandlerRef::direct(Halting);
        assert_eq!(direct.reference(), None);
        assert_eq!(format!("{:?}", direct), "Direct(<handler>)");
    }
}
