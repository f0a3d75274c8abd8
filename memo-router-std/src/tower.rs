//! Tower integration.
//!
//! - [`HandlerService`]: use a handler (or a whole compiled chain element)
//!   where a `tower::Service` is expected
//! - [`ServiceHandler`]: put a `tower::Service` into a handler chain
//!
//! ```rust,ignore
//! let registry = Namespace::new().handler("auth", ServiceHandler::new(auth_service));
//! let service = HandlerService::from_boxed(route.chain()[0].clone());
//! ```

use futures::future::{BoxFuture, poll_fn};
use memo_router_core::{BoxError, BoxHandler, DynHandler, Flow, Handler};
use std::{
    marker::PhantomData,
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

// ============================================================================
// Handler → Service Adapter
// ============================================================================

/// Wraps a handler as a tower `Service`.
pub struct HandlerService<H: ?Sized, R> {
    handler: Arc<H>,
    _marker: PhantomData<fn(R)>,
}

impl<H, R> HandlerService<H, R>
where
    H: Handler<R>,
    R: Send + 'static,
{
    /// Wrap a concrete handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
            _marker: PhantomData,
        }
    }
}

impl<R: Send + 'static> HandlerService<dyn DynHandler<R>, R> {
    /// Wrap a handler taken from a compiled chain.
    pub fn from_boxed(handler: BoxHandler<R>) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

impl<H: ?Sized, R> HandlerService<H, R> {
    /// Get a reference to the inner handler.
    pub fn inner(&self) -> &H {
        &self.handler
    }
}

impl<H: ?Sized, R> Clone for HandlerService<H, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            _marker: PhantomData,
        }
    }
}

impl<H, R> Service<R> for HandlerService<H, R>
where
    H: DynHandler<R> + ?Sized,
    R: Send + 'static,
{
    type Response = Flow;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Flow, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: R) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        Box::pin(async move { handler.call_dyn(req).await })
    }
}

// ============================================================================
// Service → Handler Adapter
// ============================================================================

/// Wraps a tower `Service` as a handler.
///
/// The service must answer with a [`Flow`] and be cheap to clone; each call
/// works on a fresh clone so the handler can be shared.
#[derive(Clone)]
pub struct ServiceHandler<S> {
    service: S,
}

impl<S> ServiceHandler<S> {
    /// Wrap a service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Get a reference to the inner service.
    pub fn inner(&self) -> &S {
        &self.service
    }
}

impl<S, R> Handler<R> for ServiceHandler<S>
where
    S: Service<R, Response = Flow> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send,
    R: Send + 'static,
{
    async fn call(&self, req: R) -> Result<Flow, BoxError> {
        let mut service = self.service.clone();
        poll_fn(|cx| service.poll_ready(cx))
            .await
            .map_err(Into::<BoxError>::into)?;
        service.call(req).await.map_err(Into::into)
    }
}
