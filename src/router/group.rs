use std::sync::Arc;

use crate::middleware::{BoxedMiddleware, Middleware};

/// Attributes of a route group
///
/// Both parts are optional. The prefix is concatenated onto the enclosing
/// prefix verbatim, so `/admin` nested in `/api` gives `/api/admin`, while
/// `admin` nested in `/api` gives `/apiadmin`.
pub struct GroupConfig<R> {
    prefix: Option<String>,
    middlewares: Vec<BoxedMiddleware<R>>,
}

impl<R> Default for GroupConfig<R> {
    fn default() -> Self {
        Self {
            prefix: None,
            middlewares: Vec::new(),
        }
    }
}

impl<R> GroupConfig<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add a single middleware
    #[must_use]
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<R> + 'static,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Add an ordered list of middleware
    #[must_use]
    pub fn middlewares<I>(mut self, middlewares: I) -> Self
    where
        I: IntoIterator<Item = BoxedMiddleware<R>>,
    {
        self.middlewares.extend(middlewares);
        self
    }
}

/// Prefix and middleware applied to routes as they are registered
///
/// The router holds the current context; `group` swaps in a nested one for
/// the duration of its callback and puts the saved one back afterwards.
pub(crate) struct RegistrationContext<R> {
    prefix: String,
    middlewares: Vec<BoxedMiddleware<R>>,
}

impl<R> RegistrationContext<R> {
    pub(crate) fn root() -> Self {
        Self {
            prefix: String::new(),
            middlewares: Vec::new(),
        }
    }

    pub(crate) fn nested(&self, config: GroupConfig<R>) -> Self {
        let mut prefix = self.prefix.clone();
        if let Some(extra) = config.prefix {
            prefix.push_str(&extra);
        }
        let mut middlewares = self.middlewares.clone();
        middlewares.extend(config.middlewares);
        Self {
            prefix,
            middlewares,
        }
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn middlewares(&self) -> &[BoxedMiddleware<R>] {
        &self.middlewares
    }
}
