use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{Middleware, Next};

#[derive(Debug, Default)]
struct Counters {
    request_count: AtomicUsize,
    total_latency_ns: AtomicU64,
    short_circuits: AtomicUsize,
}

/// Middleware for collecting invocation metrics
///
/// Tracks how often the chain below it runs and how long it takes. All
/// counters use atomic operations for thread-safe updates without locks.
///
/// It also carries a short-circuit counter that it never updates itself: a
/// passive middleware cannot observe a response produced without calling
/// `next`. Guards holding a clone bump it with
/// [`inc_short_circuit`](Self::inc_short_circuit).
///
/// Clones share the same counters, so keep one clone to read the numbers and
/// register the other:
///
/// ```rust
/// use simple_router::{MetricsMiddleware, Params, Router};
///
/// let metrics = MetricsMiddleware::new();
/// let mut router: Router = Router::new();
/// router.add_global_middleware(metrics.clone());
/// router.get("/ping", |_: &Params| "pong".to_string()).unwrap();
///
/// router.dispatch("GET", "/ping");
/// assert_eq!(metrics.request_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsMiddleware {
    counters: Arc<Counters>,
}

impl MetricsMiddleware {
    /// Create a new metrics middleware with all counters initialized to zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of chain invocations observed
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.counters.request_count.load(Ordering::Relaxed)
    }

    /// Calculate the average latency of the downstream chain
    ///
    /// Returns zero duration if nothing has been processed yet.
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        let count = self.counters.request_count.load(Ordering::Relaxed) as u64;
        if count == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(self.counters.total_latency_ns.load(Ordering::Relaxed) / count)
        }
    }

    /// Bump the shared short-circuit counter
    ///
    /// Called by guard middleware holding a clone, when they answer without
    /// running `next`. Dispatch never calls it.
    pub fn inc_short_circuit(&self) {
        self.counters.short_circuits.fetch_add(1, Ordering::Relaxed);
    }

    /// Short-circuits reported through [`inc_short_circuit`](Self::inc_short_circuit)
    #[must_use]
    pub fn short_circuits(&self) -> usize {
        self.counters.short_circuits.load(Ordering::Relaxed)
    }

    fn record(&self, latency: Duration) {
        self.counters.request_count.fetch_add(1, Ordering::Relaxed);
        self.counters
            .total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
    }
}

/// Passive: always runs `next` exactly once and returns its response as-is.
impl<R> Middleware<R> for MetricsMiddleware {
    fn handle(&self, next: Next<R>) -> R {
        let start = Instant::now();
        let response = next.run();
        self.record(start.elapsed());
        response
    }
}
