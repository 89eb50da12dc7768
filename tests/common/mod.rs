#![allow(dead_code)]

use simple_router::{Params, Router};

pub mod test_tracing {
    use tracing::subscriber::DefaultGuard;

    /// Thread-local subscriber writing through the test harness capture
    pub struct TestTracing {
        _guard: DefaultGuard,
    }

    impl TestTracing {
        pub fn init() -> Self {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter("simple_router=debug")
                .with_test_writer()
                .finish();
            Self {
                _guard: tracing::subscriber::set_default(subscriber),
            }
        }
    }
}

/// Handler returning a fixed body
pub fn text(body: &'static str) -> impl Fn(&Params) -> String + Send + Sync {
    move |_: &Params| body.to_string()
}

/// Handler echoing its name and positional parameters, e.g. `get_animal(123)`
pub fn echo(name: &'static str) -> impl Fn(&Params) -> String + Send + Sync {
    move |p: &Params| format!("{name}({})", p.values().collect::<Vec<_>>().join(","))
}

/// The verb zoo used across the integration tests
pub fn zoo_router() -> Router {
    let mut router: Router = Router::new();
    router.get("/", echo("root_handler")).unwrap();
    router.get("/zoo/animals", echo("get_animals")).unwrap();
    router.post("/zoo/animals", echo("create_animal")).unwrap();
    router.get("/zoo/animals/{id}", echo("get_animal")).unwrap();
    router.put("/zoo/animals/{id}", echo("update_animal")).unwrap();
    router.patch("/zoo/animals/{id}", echo("patch_animal")).unwrap();
    router.delete("/zoo/animals/{id}", echo("delete_animal")).unwrap();
    router
        .get("/zoo/animals/{id}/toys/{toy_id}", echo("animal_toy"))
        .unwrap();
    router
        .get(
            "/zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}",
            echo("habitat_section"),
        )
        .unwrap();
    router
}
