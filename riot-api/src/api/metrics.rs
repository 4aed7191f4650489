use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Counters of the requests a client performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    requests: AtomicU64,
    failures: AtomicU64,
    name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub failures: u64,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            requests: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fail(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    pub fn log_summary(&self) {
        let MetricsSnapshot { requests, failures } = self.snapshot();
        tracing::info!(
            client = self.name,
            "📊 {} requests executed, {} failed, in {:.2}s",
            requests,
            failures,
            self.start.elapsed().as_secs_f64()
        );
    }
}
