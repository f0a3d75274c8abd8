mod common;

use common::{Request, registry, registry_with, run_chain};
use memo_router::{
    Methods, Resource, RouteLoadError, RouteTableBuilder, boxed, resources,
    testing::RecordingHandler,
};

fn triples(builder: &RouteTableBuilder<Request>) -> Vec<(Methods, &str, Option<&str>)> {
    builder
        .routes()
        .map(|r| (r.methods(), r.path(), r.name()))
        .collect()
}

#[test]
fn test_seven_conventional_routes() {
    let mut builder = RouteTableBuilder::new(registry());
    resources!(builder, "posts", "/posts", "posts").unwrap();

    assert_eq!(
        triples(&builder),
        vec![
            (Methods::GET, "/posts", Some("posts")),
            (Methods::GET, "/posts/new", Some("new_post")),
            (Methods::POST, "/posts", Some("posts")),
            (Methods::GET, "/posts/:id", Some("post")),
            (Methods::GET, "/posts/:id/edit", Some("edit_post")),
            (Methods::PUT, "/posts/:id", Some("post")),
            (Methods::DELETE, "/posts/:id", Some("destroy_post")),
        ]
    );
}

#[test]
fn test_two_argument_form_is_unnamed() {
    let mut builder = RouteTableBuilder::new(registry());
    resources!(builder, "/channels", "channels").unwrap();

    assert_eq!(builder.len(), 7);
    assert!(builder.routes().all(|r| r.name().is_none()));
    assert_eq!(builder.routes().nth(4).map(|r| r.path()), Some("/channels/:id/edit"));
}

#[test]
fn test_registering_twice() {
    let mut builder = RouteTableBuilder::new(registry());
    resources!(builder, "posts", "/posts", "posts").unwrap();
    let second = resources!(builder, "posts", "/posts", "posts").unwrap();

    assert_eq!(builder.len(), 14);
    let named = builder.route("post").unwrap();
    assert!(std::ptr::eq(named, builder.by_id(second[5]).unwrap()));
}

#[test]
fn test_failing_resource_leaves_table_unchanged() {
    let mut builder = RouteTableBuilder::new(registry());
    builder.get_named("home", "/", ["home"]).unwrap();

    let err = resources!(builder, "widgets", "/widgets", "widgets").unwrap_err();
    assert_eq!(
        err,
        RouteLoadError::Unresolved {
            reference: "widgets.index".into()
        }
    );

    let err = resources!(builder, "posts", "/posts", "missing.action", "posts").unwrap_err();
    assert_eq!(
        err,
        RouteLoadError::Unresolved {
            reference: "missing.action".into()
        }
    );

    assert_eq!(builder.len(), 1);
    assert_eq!(builder.url("posts", None), None);
}

#[test]
fn test_conflicting_name_leaves_table_unchanged() {
    let mut builder = RouteTableBuilder::new(registry());
    builder.get_named("post", "/articles/:id", ["posts.show"]).unwrap();

    let err = builder
        .resources(Resource::named("posts", "/posts", "posts"))
        .unwrap_err();
    assert!(matches!(err, RouteLoadError::NameConflict { ref name, .. } if name == "post"));
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_invalid_positional_arguments() {
    let mut builder = RouteTableBuilder::new(registry());
    let err = resources!(builder, "posts").unwrap_err();
    assert!(matches!(err, RouteLoadError::InvalidArguments(_)));
    assert!(builder.is_empty());
}

#[tokio::test]
async fn test_middleware_runs_before_action() {
    let recorder = RecordingHandler::<Request>::new();
    let mut builder = RouteTableBuilder::new(registry_with(&recorder));
    resources!(builder, "posts", "/posts", "auth", "posts").unwrap();

    let route = builder.route("edit_post").unwrap();
    assert_eq!(route.chain().len(), 2);

    // `auth` halts anonymous requests before the action runs.
    let ran = run_chain(route.chain(), Request::get("/posts/1/edit")).await.unwrap();
    assert_eq!(ran, 1);
    assert_eq!(recorder.count(), 0);

    let mut signed_in = Request::get("/posts/1/edit");
    signed_in.user = Some("ada".into());
    let ran = run_chain(route.chain(), signed_in.clone()).await.unwrap();
    assert_eq!(ran, 2);
    assert_eq!(recorder.requests(), vec![signed_in]);
}

#[tokio::test]
async fn test_direct_middleware_and_namespace_source() {
    let recorder = RecordingHandler::<Request>::new();
    let audit = RecordingHandler::<Request>::new();
    let mut builder = RouteTableBuilder::new(registry());

    resources!(
        builder,
        "articles",
        "/articles",
        boxed(audit.clone()),
        common::controller(&recorder)
    )
    .unwrap();

    let route = builder.route("destroy_article").unwrap();
    assert_eq!(route.path(), "/articles/:id");
    run_chain(route.chain(), Request::get("/articles/3")).await.unwrap();
    assert_eq!(audit.count(), 1);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_uncountable_resource_registered_twice() {
    let mut builder = RouteTableBuilder::new(registry());
    resources!(builder, "sheep", "/sheep", "posts").unwrap();
    resources!(builder, "sheep", "/sheep", "posts").unwrap();

    assert_eq!(builder.len(), 14);
    assert_eq!(builder.url("sheep_index", None).as_deref(), Some("/sheep"));
    let params = memo_router::url_params! { "id" => 3 };
    assert_eq!(builder.url("sheep", Some(&params)).as_deref(), Some("/sheep/3"));
    assert_eq!(builder.url("destroy_sheep", None).as_deref(), Some("/sheep/:id"));
}
