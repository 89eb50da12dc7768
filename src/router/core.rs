//! Router core module - registration and the dispatch path.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use super::group::{GroupConfig, RegistrationContext};
use super::pattern::{normalize_path, Params, PathPattern};
use super::route::Route;
use crate::error::{Result, RouterError};
use crate::method::RouteMethod;
use crate::middleware::{BoxedMiddleware, Handler, Middleware};
use crate::runtime_config::RouterConfig;

/// Response produced by [`Router::dispatch`] when nothing matches
pub const NOT_FOUND: &str = "404 Not Found";

/// Result of successfully matching a request path to a route
#[derive(Debug)]
pub struct RouteMatch<'a, R> {
    /// The matched route
    pub route: &'a Route<R>,
    /// Path parameters extracted from the URL (e.g., `{id}` → `("id", "123")`)
    pub params: Params,
}

impl<R> RouteMatch<'_, R> {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.params.get_path_param(name)
    }
}

/// Router that matches `(method, path)` pairs to handlers
///
/// Routes are kept per method in registration order, and registration order
/// is the only precedence: the first route whose pattern matches the whole
/// path wins.
///
/// `R` is the response type produced by handlers and middleware. Dispatch
/// needs `R: From<&'static str>` so that it can return [`NOT_FOUND`].
pub struct Router<R = String> {
    /// Route lists keyed by method, in the order each method was first used
    pub(super) routes: Vec<(RouteMethod, Vec<Route<R>>)>,
    global_middlewares: Vec<BoxedMiddleware<R>>,
    pub(super) context: RegistrationContext<R>,
    config: RouterConfig,
}

impl<R: 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Router<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            global_middlewares: Vec::new(),
            context: RegistrationContext::root(),
            config,
        }
    }

    /// Configuration the router was built with
    ///
    /// `config().logging` is the [`LogConfig`](crate::logging::LogConfig) to
    /// hand to [`init_logging`](crate::logging::init_logging).
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a route
    ///
    /// `method` is case-insensitive. The path has its trailing `/` removed and
    /// the current group prefix prepended before compilation. The returned
    /// route can be named in place:
    ///
    /// ```rust
    /// # use simple_router::{Params, Router};
    /// let mut router: Router = Router::new();
    /// router.add("get", "/users/{id}", |p: &Params| format!("user {}", p.get(0).unwrap_or("-")))?.name("user");
    /// assert_eq!(router.dispatch("GET", "/users/42"), "user 42");
    /// # Ok::<(), simple_router::RouterError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidMethod`] for anything but GET/POST/PUT/PATCH/DELETE
    /// - [`RouterError::InvalidPattern`] when the template does not compile
    /// - [`RouterError::DuplicatePattern`] when the method already has a route
    ///   with the same compiled pattern
    ///
    /// The router is unchanged on error.
    pub fn add<H>(&mut self, method: &str, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        let method = method.parse::<RouteMethod>().inspect_err(|_| {
            warn!(method = %method, path = %path, "Route rejected: invalid method");
        })?;
        self.add_route(method, path, handler)
    }

    /// Register a route under an already-validated method
    ///
    /// # Errors
    ///
    /// As [`Router::add`], minus the method check.
    pub fn add_route<H>(
        &mut self,
        method: RouteMethod,
        path: &str,
        handler: H,
    ) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        let template = format!("{}{}", self.context.prefix(), path.trim_end_matches('/'));
        let pattern = PathPattern::compile(&template).inspect_err(|e| {
            warn!(method = %method, template = %template, error = %e, "Route rejected");
        })?;

        if let Some(existing) = self
            .routes_for_method(method)
            .and_then(|routes| routes.iter().find(|r| r.pattern() == &pattern))
        {
            warn!(
                method = %method,
                pattern = %pattern,
                existing_template = %existing.template(),
                "Route rejected: pattern already exists"
            );
            return Err(RouterError::DuplicatePattern {
                method: method.as_str().to_string(),
                pattern: pattern.as_str().to_string(),
            });
        }

        let middlewares = self.context.middlewares().to_vec();
        debug!(
            method = %method,
            template = %template,
            pattern = %pattern,
            middleware_count = middlewares.len(),
            "Route registered"
        );

        let route = Route::new(method, template, pattern, Arc::new(handler), middlewares);
        let routes = self.routes_entry(method);
        let index = routes.len();
        routes.push(route);
        Ok(&mut routes[index])
    }

    /// Register a GET route
    ///
    /// # Errors
    ///
    /// As [`Router::add_route`].
    pub fn get<H>(&mut self, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        self.add_route(RouteMethod::Get, path, handler)
    }

    /// Register a POST route
    ///
    /// # Errors
    ///
    /// As [`Router::add_route`].
    pub fn post<H>(&mut self, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        self.add_route(RouteMethod::Post, path, handler)
    }

    /// Register a PUT route
    ///
    /// # Errors
    ///
    /// As [`Router::add_route`].
    pub fn put<H>(&mut self, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        self.add_route(RouteMethod::Put, path, handler)
    }

    /// Register a PATCH route
    ///
    /// # Errors
    ///
    /// As [`Router::add_route`].
    pub fn patch<H>(&mut self, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        self.add_route(RouteMethod::Patch, path, handler)
    }

    /// Register a DELETE route
    ///
    /// # Errors
    ///
    /// As [`Router::add_route`].
    pub fn delete<H>(&mut self, path: &str, handler: H) -> Result<&mut Route<R>>
    where
        H: Handler<R> + 'static,
    {
        self.add_route(RouteMethod::Delete, path, handler)
    }

    /// Register routes under a shared prefix and/or middleware
    ///
    /// Inside `register`, every route (and nested group) sees the enclosing
    /// prefixes and middleware concatenated with this group's. When
    /// `register` returns, the previous prefix and middleware are restored,
    /// whether it succeeded or not; its error is then passed through.
    ///
    /// # Errors
    ///
    /// Whatever `register` returns.
    ///
    /// # Panics
    ///
    /// A panic in `register` is re-raised after the previous context has been
    /// restored, so a caller that catches it keeps a correctly scoped router.
    pub fn group<F>(&mut self, config: GroupConfig<R>, register: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let nested = self.context.nested(config);
        let saved = std::mem::replace(&mut self.context, nested);
        debug!(
            prefix = %self.context.prefix(),
            middleware_count = self.context.middlewares().len(),
            "Entering route group"
        );

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| register(self)));

        self.context = saved;
        match result {
            Ok(result) => result,
            Err(panic) => {
                warn!("Route group callback panicked; registration context restored");
                std::panic::resume_unwind(panic)
            }
        }
    }

    /// Append a middleware that wraps every dispatch
    ///
    /// Global middleware run outside route middleware, the first registered
    /// outermost. They also apply to routes registered before this call.
    pub fn add_global_middleware<M>(&mut self, middleware: M) -> &mut Self
    where
        M: Middleware<R> + 'static,
    {
        self.global_middlewares.push(Arc::new(middleware));
        self
    }
}

impl<R> Router<R> {
    /// Find the route serving `method` and `path` without invoking it
    ///
    /// `method` must be the uppercase token (`"GET"`, not `"get"`). The query
    /// component and trailing `/` of `path` are ignored, and the remaining
    /// path must match a pattern entirely.
    #[must_use]
    pub fn match_route(&self, method: &str, path: &str) -> Option<RouteMatch<'_, R>> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let path = request_path(path);
        let result = self
            .routes
            .iter()
            .find(|(m, _)| m.as_str() == method)
            .and_then(|(_, routes)| {
                routes.iter().find_map(|route| {
                    route
                        .pattern()
                        .captures(path)
                        .map(|params| RouteMatch { route, params })
                })
            });
        let match_duration = match_start.elapsed();

        match &result {
            Some(found) if match_duration > self.config.slow_match_threshold() => {
                warn!(
                    method = %method,
                    path = %path,
                    route_pattern = %found.route.pattern(),
                    path_params = ?found.params,
                    duration_us = match_duration.as_micros(),
                    "Slow route matching detected"
                );
            }
            Some(found) => {
                info!(
                    method = %method,
                    path = %path,
                    route_pattern = %found.route.pattern(),
                    path_params = ?found.params,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
            }
            None => {
                info!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
            }
        }

        result
    }

    /// Serve a request
    ///
    /// Runs the first matching route's handler inside the global and route
    /// middleware, passing the path parameters positionally. An unknown
    /// method or unmatched path is not an error: the result is [`NOT_FOUND`].
    pub fn dispatch(&self, method: &str, path: &str) -> R
    where
        R: From<&'static str>,
    {
        match self.match_route(method, path) {
            Some(found) => self.invoke(found),
            None => R::from(NOT_FOUND),
        }
    }

    /// Serve an [`http::Request`] by its method and URI path
    pub fn dispatch_request<B>(&self, request: &http::Request<B>) -> R
    where
        R: From<&'static str>,
    {
        self.dispatch(request.method().as_str(), request.uri().path())
    }

    /// Invoke the first route named `name`
    ///
    /// Routes are searched in method order (the order methods were first
    /// registered), then registration order. The route's middleware chain
    /// runs as usual, but the handler receives no path parameters.
    ///
    /// # Errors
    ///
    /// [`RouterError::RouteNotFound`] when no route carries the name.
    pub fn route(&self, name: &str) -> Result<R> {
        let route = self
            .routes()
            .find(|route| route.route_name() == Some(name))
            .ok_or_else(|| RouterError::RouteNotFound {
                name: name.to_string(),
            })?;
        debug!(name = %name, pattern = %route.pattern(), "Invoking named route");
        Ok(self.invoke(RouteMatch {
            route,
            params: Params::new(),
        }))
    }

    /// All routes, in lookup order
    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.iter().flat_map(|(_, routes)| routes.iter())
    }

    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.iter().map(|(_, routes)| routes.len()).sum()
    }

    /// Every compiled pattern string, in lookup order
    #[must_use]
    pub fn path_patterns(&self) -> Vec<String> {
        self.routes()
            .map(|route| route.pattern().as_str().to_string())
            .collect()
    }

    /// Log the routing table
    pub fn dump_routes(&self) {
        info!(routes_count = self.route_count(), "Routing table");
        for route in self.routes() {
            info!(
                method = %route.method(),
                template = %route.template(),
                pattern = %route.pattern(),
                name = route.route_name().unwrap_or("-"),
                middleware_count = route.middleware_count(),
                "Route"
            );
        }
    }

    fn invoke(&self, found: RouteMatch<'_, R>) -> R {
        let RouteMatch { route, params } = found;
        let span = info_span!(
            "dispatch",
            method = %route.method(),
            pattern = %route.pattern()
        );
        let _guard = span.enter();
        route.chain(&self.global_middlewares).invoke(params)
    }

    fn routes_for_method(&self, method: RouteMethod) -> Option<&Vec<Route<R>>> {
        self.routes
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, routes)| routes)
    }

    fn routes_entry(&mut self, method: RouteMethod) -> &mut Vec<Route<R>> {
        let index = match self.routes.iter().position(|(m, _)| *m == method) {
            Some(index) => index,
            None => {
                self.routes.push((method, Vec::new()));
                self.routes.len() - 1
            }
        };
        &mut self.routes[index].1
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.route_count())
            .field("global_middlewares", &self.global_middlewares.len())
            .field("prefix", &self.context.prefix())
            .field("config", &self.config)
            .finish()
    }
}

/// Drop the query component and trailing `/`; empty becomes `/`.
pub(super) fn request_path(path: &str) -> &str {
    let path = path.split_once('?').map_or(path, |(path, _query)| path);
    normalize_path(path)
}
