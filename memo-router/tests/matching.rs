mod common;

use common::{Request, registry};
use memo_router::{
    Methods, Recognized, RouteTable, RouteTableBuilder, RouterOptions, resources,
};

fn table(options: RouterOptions) -> RouteTable<Request> {
    let mut builder = RouteTableBuilder::with_options(registry(), options);
    resources!(builder, "posts", "/posts", "posts").unwrap();
    builder.get_named("home", "/", ["home"]).unwrap();
    builder.build().unwrap()
}

#[test]
fn test_recognize_resource_routes() {
    let table = table(RouterOptions::new());

    let cases = [
        (Methods::GET, "/posts", "posts"),
        (Methods::GET, "/posts/new", "new_post"),
        (Methods::POST, "/posts", "posts"),
        (Methods::GET, "/posts/1", "post"),
        (Methods::GET, "/posts/1/edit", "edit_post"),
        (Methods::PUT, "/posts/1", "post"),
        (Methods::DELETE, "/posts/1", "destroy_post"),
        (Methods::GET, "/", "home"),
    ];
    for (method, path, name) in cases {
        let matched = table.recognize(method, path).matched();
        assert_eq!(
            matched.and_then(|m| m.route.name()),
            Some(name),
            "{} {}",
            method,
            path
        );
    }
}

#[test]
fn test_collection_route_beats_member_token() {
    // `/posts/new` is registered before `/posts/:id`.
    let table = table(RouterOptions::new());
    let matched = table.recognize(Methods::GET, "/posts/new").matched().unwrap();
    assert!(matched.params.is_empty());
}

#[test]
fn test_method_not_allowed_and_not_found() {
    let table = table(RouterOptions::new());

    match table.recognize(Methods::PATCH, "/posts/1") {
        Recognized::MethodNotAllowed(allowed) => {
            assert_eq!(allowed, Methods::GET | Methods::PUT | Methods::DELETE)
        }
        other => panic!("expected MethodNotAllowed, got {:?}", other),
    }
    assert!(matches!(
        table.recognize(Methods::GET, "/comments"),
        Recognized::NotFound
    ));
}

#[test]
fn test_strict_and_sensitive_options() {
    let lenient = table(RouterOptions::new());
    assert!(lenient.recognize(Methods::GET, "/POSTS/").matched().is_some());

    let strict = table(RouterOptions::new().strict(true).sensitive(true));
    assert!(strict.recognize(Methods::GET, "/posts/").matched().is_none());
    assert!(strict.recognize(Methods::GET, "/POSTS").matched().is_none());
    assert!(strict.recognize(Methods::GET, "/posts").matched().is_some());
}

#[cfg(feature = "matchit")]
#[test]
fn test_matchit_backend() {
    use memo_router::MatchitMatcher;

    let mut builder = RouteTableBuilder::new(registry());
    resources!(builder, "posts", "/posts", "posts").unwrap();
    let table = builder.build_with::<MatchitMatcher>().unwrap();

    let matched = table.recognize(Methods::GET, "/posts/12/edit").matched().unwrap();
    assert_eq!(matched.route.name(), Some("edit_post"));
    assert_eq!(matched.param("id"), Some("12"));

    // matchit prefers the static segment regardless of order.
    let matched = table.recognize(Methods::GET, "/posts/new").matched().unwrap();
    assert_eq!(matched.route.name(), Some("new_post"));
}

#[cfg(feature = "matchit")]
#[test]
fn test_matchit_conflict_fails_build() {
    use memo_router::{MatchitMatcher, RouteLoadError};

    let mut builder = RouteTableBuilder::new(registry());
    builder.get("/posts/:id", ["posts.show"]).unwrap();
    builder.get("/posts/:slug", ["posts.show"]).unwrap();
    let err = builder.build_with::<MatchitMatcher>().unwrap_err();
    assert!(matches!(err, RouteLoadError::Matcher { ref path, .. } if path == "/posts/:slug"));
}
