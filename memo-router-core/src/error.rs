//! Error types for memo-router.
//!
//! - [`RouteLoadError`] - raised while the route table is being built
//! - [`ParseMethodError`] - an HTTP verb name that is not recognised

use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while registering routes.
///
/// Every variant is a startup failure: the caller is expected to abort boot
/// rather than serve from a partially built table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteLoadError {
    /// A dotted handler reference has no entry in the handler registry.
    #[error("`{reference}` is not a valid route handler: nothing is registered under that path")]
    Unresolved {
        /// The dotted reference as written by the caller.
        reference: String,
    },

    /// A handler reference resolved to a namespace instead of a handler.
    #[error("`{reference}` is not a valid route handler: it names a namespace, not a handler")]
    NotCallable {
        /// The dotted reference as written by the caller.
        reference: String,
    },

    /// A path template declares the same `:token` twice.
    #[error("route `{path}` declares `:{param}` more than once")]
    DuplicateParam {
        /// The offending path template.
        path: String,
        /// The repeated token name.
        param: String,
    },

    /// A route name is already bound to a different path template.
    #[error("route name `{name}` is bound to `{existing}` and cannot also name `{path}`")]
    NameConflict {
        /// The route name.
        name: String,
        /// The template already registered under the name.
        existing: String,
        /// The template of the rejected registration.
        path: String,
    },

    /// `register` was called with an empty handler chain.
    #[error("route `{path}` has an empty handler chain")]
    EmptyChain {
        /// The path template.
        path: String,
    },

    /// `register` was called with an empty method set.
    #[error("route `{path}` does not answer to any HTTP method")]
    NoMethods {
        /// The path template.
        path: String,
    },

    /// The legacy handler-first form was used without a path in `options.name`.
    #[error("handler-first registration of `{handler}` carries no path")]
    MissingPath {
        /// A description of the handler that was supplied.
        handler: String,
    },

    /// Positional resource arguments could not be interpreted.
    #[error("invalid resource arguments: {0}")]
    InvalidArguments(String),

    /// The path matcher rejected a template while the table was sealed.
    #[error("matcher rejected route `{path}`: {reason}")]
    Matcher {
        /// The path template.
        path: String,
        /// The matcher's explanation.
        reason: String,
    },
}

/// Error returned when parsing an unknown HTTP verb.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);
