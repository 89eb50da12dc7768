use simple_router::{GroupConfig, Next, Params, Router, RouterError};

mod common;
use common::text;

#[test]
fn test_route_invokes_named_handler() {
    let mut router: Router = Router::new();
    router.get("/", text("home")).unwrap().name("home");
    router.post("/login", text("logged in")).unwrap().name("login");

    assert_eq!(router.route("home").unwrap(), "home");
    assert_eq!(router.route("login").unwrap(), "logged in");
}

#[test]
fn test_route_unknown_name() {
    let mut router: Router = Router::new();
    router.get("/", text("home")).unwrap();

    let err = router.route("home").unwrap_err();
    assert_eq!(
        err,
        RouterError::RouteNotFound {
            name: "home".to_string()
        }
    );
    assert!(err.to_string().contains("'home'"));
}

#[test]
fn test_route_passes_no_params() {
    let mut router: Router = Router::new();
    router
        .get("/users/{id}", |p: &Params| {
            format!("params={} id={:?}", p.len(), p.get(0))
        })
        .unwrap()
        .name("user");

    assert_eq!(router.route("user").unwrap(), "params=0 id=None");
    assert_eq!(router.dispatch("GET", "/users/5"), "params=1 id=Some(\"5\")");
}

#[test]
fn test_route_runs_middleware_chain() {
    let mut router: Router = Router::new();
    router.add_global_middleware(|next: Next<String>| format!("g:{}", next.run()));
    router
        .group(
            GroupConfig::new()
                .prefix("/admin")
                .middleware(|next: Next<String>| format!("admin:{}", next.run())),
            |r| {
                r.get("/dashboard", text("dashboard"))?.name("admin.dashboard");
                Ok(())
            },
        )
        .unwrap();

    assert_eq!(router.route("admin.dashboard").unwrap(), "g:admin:dashboard");
}

#[test]
fn test_first_route_with_name_wins() {
    let mut router: Router = Router::new();
    router.get("/a", text("get a")).unwrap().name("dup");
    router.get("/b", text("get b")).unwrap().name("dup");
    assert_eq!(router.route("dup").unwrap(), "get a");
}

#[test]
fn test_name_lookup_follows_method_order() {
    let mut router: Router = Router::new();
    router.post("/first", text("post")).unwrap();
    router.get("/second", text("get")).unwrap().name("shared");
    // POST's list was created first, so it is searched first
    router.post("/third", text("post third")).unwrap().name("shared");

    assert_eq!(router.route("shared").unwrap(), "post third");
}

#[test]
fn test_renaming_replaces_name() {
    let mut router: Router = Router::new();
    router
        .get("/x", text("x"))
        .unwrap()
        .name("old")
        .name("new");

    assert!(router.route("old").is_err());
    assert_eq!(router.route("new").unwrap(), "x");
    assert_eq!(
        router.routes().next().and_then(|r| r.route_name()),
        Some("new")
    );
}
