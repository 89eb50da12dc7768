//! # Middleware Module
//!
//! Handlers and middleware are trait objects so that closures and structs can
//! be registered side by side:
//!
//! - [`Handler`] - the terminal callable of a route, given the path [`Params`](crate::Params)
//! - [`Middleware`] - wraps a continuation ([`Next`]) and decides whether,
//!   when and how often the rest of the chain runs
//! - [`Chain`] - composes global and route middleware around a handler
//! - [`MetricsMiddleware`] - passive request counting and latency
//!
//! ## Ordering
//!
//! For a dispatch, global middleware run outermost in registration order,
//! followed by the group middleware the route captured, innermost last:
//!
//! ```rust
//! use simple_router::{GroupConfig, Next, Params, Router};
//!
//! let mut router: Router = Router::new();
//! router.add_global_middleware(|next: Next<String>| format!("Global Middleware{}", next.run()));
//! router
//!     .group(
//!         GroupConfig::new().middleware(|next: Next<String>| format!("Middleware 1{}", next.run())),
//!         |r| {
//!             r.get("/test", |_: &Params| "Test Route".to_string())?;
//!             Ok(())
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(router.dispatch("GET", "/test"), "Global MiddlewareMiddleware 1Test Route");
//! ```

mod chain;
mod core;
mod metrics;

pub use self::core::{boxed, BoxedHandler, BoxedMiddleware, Handler, Middleware};
pub use chain::{Chain, Next};
pub use metrics::MetricsMiddleware;
