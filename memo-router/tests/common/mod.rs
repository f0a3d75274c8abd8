#![allow(dead_code)]

use memo_router::{BoxError, BoxHandler, DynHandler, Flow, Namespace, testing::RecordingHandler};

// ============================================================================
// Test Request Type
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub user: Option<String>,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            user: None,
        }
    }
}

// ============================================================================
// Registries
// ============================================================================

pub const POST_ACTIONS: [&str; 7] = ["index", "new", "create", "show", "edit", "update", "destroy"];

/// A controller namespace whose every action is `recorder`.
pub fn controller(recorder: &RecordingHandler<Request>) -> Namespace<Request> {
    POST_ACTIONS
        .iter()
        .fold(Namespace::new(), |ns, action| ns.handler(*action, recorder.clone()))
}

/// ```text
/// home
/// auth
/// posts.{index,new,create,show,edit,update,destroy}
/// channels.{...same...}
/// user.profile.show
/// ```
pub fn registry() -> Namespace<Request> {
    registry_with(&RecordingHandler::new())
}

pub fn registry_with(recorder: &RecordingHandler<Request>) -> Namespace<Request> {
    Namespace::new()
        .handler("home", |_: Request| async {})
        .handler("auth", |req: Request| async move {
            if req.user.is_some() { Flow::Next } else { Flow::Halt }
        })
        .namespace("posts", controller(recorder))
        .namespace("channels", controller(recorder))
        .namespace(
            "user",
            Namespace::new().namespace(
                "profile",
                Namespace::new().handler("show", recorder.clone()),
            ),
        )
}

// ============================================================================
// Chain Runner
// ============================================================================

/// Run a compiled chain in order until a handler halts.
pub async fn run_chain(chain: &[BoxHandler<Request>], req: Request) -> Result<usize, BoxError> {
    let mut ran = 0;
    for handler in chain {
        ran += 1;
        if handler.call_dyn(req.clone()).await? == Flow::Halt {
            break;
        }
    }
    Ok(ran)
}
