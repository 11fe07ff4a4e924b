// Metrics hooks for the matching engine.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`], then every call to [`crate::MatchEngine::search`]
// reports its latency, candidate count, and verdict. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of a search.
    ///
    /// `latency` is the wall-clock duration of the whole `search` call,
    /// `candidate_count` is the number of candidates scored, and `conclusive`
    /// is the verdict returned to the caller.
    fn record_search(&self, latency: Duration, candidate_count: usize, conclusive: bool);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// Typically called once during service startup so all `MatchEngine`
/// instances share the same metrics backend.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("search metrics lock poisoned");
    *guard = recorder;
}
