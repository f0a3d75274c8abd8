//! Testing utilities for memo-router.
//!
//! - [`RecordingHandler`]: records every request it is called with
//! - [`CountingHandler`]: counts invocations
//! - [`noop`]: a boxed handler that does nothing
//! - [`sample_namespace`]: a small handler registry with a `posts` controller

use memo_router_core::{BoxError, BoxHandler, Flow, Handler, Namespace, boxed};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

/// Minimal request type for exercising handler chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRequest {
    /// The request path.
    pub path: String,
}

impl TestRequest {
    /// Create a request for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all requests it receives.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<TestRequest>::new();
/// let registry = Namespace::new().handler("home", recorder.clone());
///
/// // Register, recognise, run the chain...
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<R: Clone> {
    requests: Arc<Mutex<Vec<R>>>,
    flow: Flow,
}

impl<R: Clone> RecordingHandler<R> {
    /// Create a recording handler that returns `Next`.
    pub fn new() -> Self {
        Self::with_flow(Flow::Next)
    }

    /// Create a recording handler that returns `flow`.
    pub fn with_flow(flow: Flow) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            flow,
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<R> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<R: Clone> Default for RecordingHandler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> Clone for RecordingHandler<R> {
    fn clone(&self) -> Self {
        Self {
            requests: Arc::clone(&self.requests),
            flow: self.flow,
        }
    }
}

impl<R: Clone + Send + 'static> Handler<R> for RecordingHandler<R> {
    async fn call(&self, req: R) -> Result<Flow, BoxError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req);
        Ok(self.flow)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<R: Send + 'static> Handler<R> for CountingHandler {
    async fn call(&self, _req: R) -> Result<Flow, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Flow::Next)
    }
}

/// A boxed handler that does nothing and continues the chain.
pub fn noop<R: Send + 'static>() -> BoxHandler<R> {
    boxed(|_: R| async {})
}

/// A registry with a conventional `posts` controller.
///
/// ```text
/// home
/// posts.{index,new,create,show,edit,update,destroy}
/// user.profile.show
/// ```
pub fn sample_namespace<R: Send + 'static>() -> Namespace<R> {
    let posts = ["index", "new", "create", "show", "edit", "update", "destroy"]
        .into_iter()
        .fold(Namespace::new(), |mut ns, action| {
            ns.insert_boxed(action, noop());
            ns
        });

    let mut home = Namespace::new();
    home.insert_boxed("home", noop());
    let mut show = Namespace::new();
    show.insert_boxed("show", noop());

    home.namespace("posts", posts)
        .namespace("user", Namespace::new().namespace("profile", show))
}
