use std::sync::Arc;

use super::chain::Next;
use crate::router::Params;

/// Terminal request handler
///
/// Receives the path parameters of the matched route, in placeholder order,
/// and produces the response. Any `Fn(&Params) -> R` closure is a handler.
pub trait Handler<R>: Send + Sync {
    fn call(&self, params: &Params) -> R;
}

impl<R, F> Handler<R> for F
where
    F: Fn(&Params) -> R + Send + Sync,
{
    fn call(&self, params: &Params) -> R {
        self(params)
    }
}

/// A function wrapping the rest of the chain
///
/// A middleware only sees the continuation, never the route parameters. It
/// may call [`Next::run`] once, several times, or not at all, and may return
/// the downstream response unchanged, transformed, or replaced.
pub trait Middleware<R>: Send + Sync {
    fn handle(&self, next: Next<R>) -> R;
}

impl<R, F> Middleware<R> for F
where
    F: Fn(Next<R>) -> R + Send + Sync,
{
    fn handle(&self, next: Next<R>) -> R {
        self(next)
    }
}

pub type BoxedHandler<R> = Arc<dyn Handler<R>>;

pub type BoxedMiddleware<R> = Arc<dyn Middleware<R>>;

/// Box a middleware for APIs taking a list, such as
/// [`GroupConfig::middlewares`](crate::GroupConfig::middlewares).
#[must_use]
pub fn boxed<R, M>(middleware: M) -> BoxedMiddleware<R>
where
    M: Middleware<R> + 'static,
{
    Arc::new(middleware)
}
