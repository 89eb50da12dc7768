//! # simple-router
//!
//! **simple-router** is an in-process HTTP request router. The host hands it a
//! `(method, path)` pair; it finds the registered route, extracts the named
//! path parameters and runs the route's handler wrapped in its middleware.
//! Sockets, header parsing and body serialization stay with the host.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - **[`router`]** - Route registration, groups, matching, dispatch and named routes
//! - **[`middleware`]** - Handler and middleware traits, chain composition, metrics
//! - **[`method`]** - The closed set of routable HTTP methods
//! - **[`error`]** - Registration and lookup errors
//! - **[`runtime_config`]** - Router configuration from the environment or TOML
//! - **[`logging`]** - `tracing-subscriber` installation
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host
//!     participant Router
//!     participant Pattern as PathPattern
//!     participant Chain as Middleware Chain
//!     participant Handler
//!
//!     Host->>Router: dispatch("GET", "/users/42?tab=posts")
//!     Router->>Router: Strip query and trailing slash
//!     Router->>Pattern: Test GET routes in registration order
//!     Pattern-->>Router: First match + Params ["42"]
//!
//!     alt No Route Match
//!         Router-->>Host: "404 Not Found"
//!     end
//!
//!     Router->>Chain: global middleware, then group middleware
//!     Chain->>Handler: handler(params)
//!     Handler-->>Chain: response
//!     Chain-->>Router: response (possibly transformed)
//!     Router-->>Host: response
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_router::{GroupConfig, Next, Params, Router, RouterError, NOT_FOUND};
//!
//! # fn main() -> Result<(), RouterError> {
//! let mut router: Router = Router::new();
//!
//! router.get("/", |_: &Params| "home".to_string())?.name("home");
//! router.get("/posts/{post}", |p: &Params| format!("post {}", &p[0]))?;
//!
//! router.group(
//!     GroupConfig::new()
//!         .prefix("/admin")
//!         .middleware(|next: Next<String>| format!("[admin] {}", next.run())),
//!     |r| {
//!         r.delete("/posts/{post}", |p: &Params| format!("deleted {}", &p[0]))?;
//!         Ok(())
//!     },
//! )?;
//!
//! assert_eq!(router.dispatch("GET", "/posts/hello/"), "post hello");
//! assert_eq!(router.dispatch("DELETE", "/admin/posts/hello"), "[admin] deleted hello");
//! assert_eq!(router.dispatch("DELETE", "/posts/hello"), NOT_FOUND);
//! assert_eq!(router.route("home")?, "home");
//! # Ok(())
//! # }
//! ```
//!
//! ## Rules Worth Knowing
//!
//! 1. **Registration order is priority**: the first matching route wins
//! 2. **Whole-path matching**: `/users/{id}` never matches `/users/1/extra`
//! 3. **Duplicates are rejected**: same method and compiled pattern twice is an error
//! 4. **404 is a value**: an unmatched dispatch returns [`NOT_FOUND`], not an error
//! 5. **Named routes take no parameters**: [`Router::route`] passes empty [`Params`]
//!
//! ## Concurrency
//!
//! Registration takes `&mut self`; dispatch and named lookup take `&self`. A
//! fully registered `Router<R>` is `Send + Sync` when `R` is, so it can be
//! shared behind an `Arc` and dispatched from many threads.

pub mod error;
pub mod logging;
pub mod method;
pub mod middleware;
pub mod router;
pub mod runtime_config;

pub use error::{Result, RouterError};
pub use method::RouteMethod;
pub use middleware::{Handler, MetricsMiddleware, Middleware, Next};
pub use router::{GroupConfig, Params, PathPattern, Route, RouteMatch, Router, NOT_FOUND};
pub use runtime_config::RouterConfig;
