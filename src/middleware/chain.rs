//! Middleware chain construction.
//!
//! A chain is the ordered middleware list of a dispatch (global middleware
//! first, then the route's group middleware) followed by the terminal handler.
//! Building a chain does no work; nothing runs until [`Next::run`] is called
//! on the outermost continuation.

use std::fmt;
use std::sync::Arc;

use super::core::{BoxedHandler, BoxedMiddleware};
use crate::router::Params;

/// Continuation handed to a middleware
///
/// Each `Next` points at one position in the chain. Running it invokes the
/// middleware at that position with a continuation for the following one; at
/// the end of the list it calls the handler with the extracted parameters.
pub struct Next<R> {
    middlewares: Arc<[BoxedMiddleware<R>]>,
    position: usize,
    handler: BoxedHandler<R>,
    params: Arc<Params>,
}

impl<R> Next<R> {
    /// Run the remainder of the chain
    pub fn run(&self) -> R {
        match self.middlewares.get(self.position) {
            Some(middleware) => middleware.handle(self.advance()),
            None => self.handler.call(&self.params),
        }
    }

    /// Number of middleware still ahead of the handler
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.middlewares.len().saturating_sub(self.position)
    }

    fn advance(&self) -> Self {
        Self {
            middlewares: Arc::clone(&self.middlewares),
            position: self.position + 1,
            handler: Arc::clone(&self.handler),
            params: Arc::clone(&self.params),
        }
    }
}

impl<R> Clone for Next<R> {
    fn clone(&self) -> Self {
        Self {
            middlewares: Arc::clone(&self.middlewares),
            position: self.position,
            handler: Arc::clone(&self.handler),
            params: Arc::clone(&self.params),
        }
    }
}

impl<R> fmt::Debug for Next<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish_non_exhaustive()
    }
}

/// Builder for a middleware chain around one handler
///
/// Layers are appended outermost first: the first middleware added is the
/// first to run and the last to see the response.
pub struct Chain<R> {
    middlewares: Vec<BoxedMiddleware<R>>,
    handler: BoxedHandler<R>,
}

impl<R> Chain<R> {
    #[must_use]
    pub fn new(handler: BoxedHandler<R>) -> Self {
        Self {
            middlewares: Vec::new(),
            handler,
        }
    }

    /// Append a layer of middleware inside the ones already added
    #[must_use]
    pub fn layer<'a, I>(mut self, middlewares: I) -> Self
    where
        I: IntoIterator<Item = &'a BoxedMiddleware<R>>,
        R: 'a,
    {
        self.middlewares.extend(middlewares.into_iter().map(Arc::clone));
        self
    }

    /// Outermost continuation for `params`, without running anything
    #[must_use]
    pub fn build(self, params: Params) -> Next<R> {
        Next {
            middlewares: self.middlewares.into(),
            position: 0,
            handler: self.handler,
            params: Arc::new(params),
        }
    }

    /// Build and run the chain
    pub fn invoke(self, params: Params) -> R {
        self.build(params).run()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::middleware::boxed;

    fn handler() -> BoxedHandler<String> {
        Arc::new(|params: &Params| {
            format!("handler({})", params.values().collect::<Vec<_>>().join(","))
        })
    }

    #[test]
    fn test_empty_chain_calls_handler() {
        let response = Chain::new(handler()).invoke(Params::new());
        assert_eq!(response, "handler()");
    }

    #[test]
    fn test_first_layer_is_outermost() {
        let outer = vec![boxed(|next: Next<String>| format!("A[{}]", next.run()))];
        let inner = vec![
            boxed(|next: Next<String>| format!("B[{}]", next.run())),
            boxed(|next: Next<String>| format!("C[{}]", next.run())),
        ];
        let response = Chain::new(handler())
            .layer(&outer)
            .layer(&inner)
            .invoke(Params::new());
        assert_eq!(response, "A[B[C[handler()]]]");
    }

    #[test]
    fn test_build_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handler: BoxedHandler<String> = Arc::new(move |_: &Params| {
            counter.fetch_add(1, Ordering::SeqCst);
            "done".to_string()
        });
        let next = Chain::new(handler).build(Params::new());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(next.run(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_middleware_controls_next() {
        let twice = vec![boxed(|next: Next<String>| format!("{}+{}", next.run(), next.run()))];
        assert_eq!(
            Chain::new(handler()).layer(&twice).invoke(Params::new()),
            "handler()+handler()"
        );

        let short_circuit = vec![boxed(|_next: Next<String>| "blocked".to_string())];
        assert_eq!(
            Chain::new(handler()).layer(&short_circuit).invoke(Params::new()),
            "blocked"
        );
    }

    #[test]
    fn test_remaining_counts_down() {
        let layers = vec![boxed(|next: Next<String>| {
            assert_eq!(next.remaining(), 0);
            next.run()
        })];
        let next = Chain::new(handler()).layer(&layers).build(Params::new());
        assert_eq!(next.remaining(), 1);
        next.run();
    }
}
