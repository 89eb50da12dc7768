use std::fmt;

use super::pattern::PathPattern;
use crate::method::RouteMethod;
use crate::middleware::{BoxedHandler, BoxedMiddleware, Chain};

/// One registered endpoint
///
/// Created by [`Router::add`](crate::Router::add) and owned by the router.
/// Everything except the name is fixed at registration; the group middleware
/// in effect at that moment is captured here and never re-read.
pub struct Route<R> {
    method: RouteMethod,
    template: String,
    pattern: PathPattern,
    handler: BoxedHandler<R>,
    middlewares: Vec<BoxedMiddleware<R>>,
    name: Option<String>,
}

impl<R> Route<R> {
    pub(crate) fn new(
        method: RouteMethod,
        template: String,
        pattern: PathPattern,
        handler: BoxedHandler<R>,
        middlewares: Vec<BoxedMiddleware<R>>,
    ) -> Self {
        Self {
            method,
            template,
            pattern,
            handler,
            middlewares,
            name: None,
        }
    }

    /// Assign a name for [`Router::route`](crate::Router::route)
    ///
    /// Names are not required to be unique; lookup returns the first route
    /// carrying the name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn route_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn method(&self) -> RouteMethod {
        self.method
    }

    /// Registration path with the group prefix applied
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Group middleware captured at registration
    #[must_use]
    pub fn middleware_count(&self) -> usize {
        self.middlewares.len()
    }

    /// Chain for one invocation: `global` outermost, then this route's own
    pub(crate) fn chain(&self, global: &[BoxedMiddleware<R>]) -> Chain<R> {
        Chain::new(std::sync::Arc::clone(&self.handler))
            .layer(global)
            .layer(&self.middlewares)
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("pattern", &self.pattern.as_str())
            .field("middlewares", &self.middlewares.len())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
