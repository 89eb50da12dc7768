//! # Router Module
//!
//! The router module provides route registration, path matching and dispatch.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling path templates such as `/users/{id}` into anchored matchers
//! - Keeping routes per HTTP method in registration order
//! - Rejecting duplicate patterns at registration
//! - Applying group prefixes and middleware while routes are registered
//! - Matching incoming `(method, path)` pairs and extracting path parameters
//! - Running the matched handler inside its middleware chain
//! - Invoking routes by name
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Registration**: `add` (or `get`, `post`, ...) compiles the template
//!    with the current group prefix, captures the current group middleware and
//!    appends a [`Route`] to the method's list.
//!
//! 2. **Dispatch**: the query string and trailing `/` are stripped, the
//!    method's routes are tested in registration order, and the first match is
//!    invoked. First match wins; there is no most-specific tie-break.
//!
//! ## Example
//!
//! ```rust
//! use simple_router::{GroupConfig, Params, Router, NOT_FOUND};
//!
//! # fn main() -> Result<(), simple_router::RouterError> {
//! let mut router: Router = Router::new();
//! router.get("/", |_: &Params| "home".to_string())?;
//! router.group(GroupConfig::new().prefix("/admin"), |r| {
//!     r.get("/users/{id}", |p: &Params| format!("admin user {}", p.get(0).unwrap_or("-")))?
//!         .name("admin.user");
//!     Ok(())
//! })?;
//!
//! assert_eq!(router.dispatch("GET", "/admin/users/7?tab=posts"), "admin user 7");
//! assert_eq!(router.dispatch("GET", "/users/7"), NOT_FOUND);
//! # Ok(())
//! # }
//! ```

mod core;
mod group;
mod pattern;
mod route;

pub use self::core::{RouteMatch, Router, NOT_FOUND};
pub use group::GroupConfig;
pub use pattern::{ParamVec, Params, PathPattern, MAX_INLINE_PARAMS};
pub use route::Route;
