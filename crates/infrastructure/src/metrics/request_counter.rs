use dashmap::DashMap;
use registry_resolve_application::ports::RequestCounter;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

pub const REQUEST_COUNT_METRIC: &str = "registry_resolve_request_count_total";

static GLOBAL: LazyLock<Arc<RequestCountMetrics>> =
    LazyLock::new(|| Arc::new(RequestCountMetrics::new()));

/// Monotonic count of answered requests, one series per server identity.
#[derive(Default)]
pub struct RequestCountMetrics {
    counts: DashMap<Arc<str>, AtomicU64>,
}

impl RequestCountMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance shared by every listener.
    pub fn global() -> Arc<RequestCountMetrics> {
        Arc::clone(&GLOBAL)
    }

    pub fn get(&self, server: &str) -> u64 {
        self.counts
            .get(server)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .map(|entry| entry.value().load(Ordering::Relaxed))
            .sum()
    }

    /// `(server, count)` pairs sorted by server.
    pub fn snapshot(&self) -> Vec<(Arc<str>, u64)> {
        let mut series: Vec<(Arc<str>, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().load(Ordering::Relaxed)))
            .collect();
        series.sort_by(|a, b| a.0.cmp(&b.0));
        series
    }
}

impl RequestCounter for RequestCountMetrics {
    fn increment(&self, server: &str) {
        if let Some(counter) = self.counts.get(server) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.counts
            .entry(Arc::from(server))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }
}
