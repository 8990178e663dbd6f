//! View invalidation boundary.
//!
//! Mutations mark a cached admin view as stale; recomputation happens
//! lazily on next access, outside this crate. Repositories take the trait
//! by reference, so tests can substitute a recording implementation.

use std::sync::Mutex;

use tracing::debug;

/// Process-wide notification that a named view's cached render is stale.
///
/// The signal is fire-and-forget and idempotent: marking an already-stale
/// view again is a no-op for the view system.
pub trait ViewInvalidator: Send + Sync {
    fn invalidate(&self, view: &str);
}

/// Invalidator that drops every signal, for contexts with no rendered views
/// (batch imports, one-off scripts).
#[derive(Debug, Default)]
pub struct NoopViewInvalidator;

impl ViewInvalidator for NoopViewInvalidator {
    fn invalidate(&self, _view: &str) {}
}

/// Invalidator that records every signal it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingViewInvalidator {
    signals: Mutex<Vec<String>>,
}

impl RecordingViewInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All view keys signaled so far, in signal order.
    pub fn signals(&self) -> Vec<String> {
        self.signals.lock().expect("signal log poisoned").clone()
    }

    /// Number of signals received for one view key.
    pub fn count_for(&self, view: &str) -> usize {
        self.signals
            .lock()
            .expect("signal log poisoned")
            .iter()
            .filter(|v| *v == view)
            .count()
    }

    pub fn contains(&self, view: &str) -> bool {
        self.count_for(view) > 0
    }
}

impl ViewInvalidator for RecordingViewInvalidator {
    fn invalidate(&self, view: &str) {
        debug!("view invalidated: {}", view);
        self.signals
            .lock()
            .expect("signal log poisoned")
            .push(view.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_invalidator_counts_per_view() {
        let views = RecordingViewInvalidator::new();
        views.invalidate("/admin/products");
        views.invalidate("/admin/products");
        views.invalidate("/admin/categories");

        assert_eq!(views.count_for("/admin/products"), 2);
        assert_eq!(views.count_for("/admin/categories"), 1);
        assert!(views.contains("/admin/products"));
        assert!(!views.contains("/admin/orders"));
        assert_eq!(
            views.signals(),
            vec!["/admin/products", "/admin/products", "/admin/categories"]
        );
    }

    #[test]
    fn noop_invalidator_accepts_signals() {
        let views = NoopViewInvalidator;
        views.invalidate("/admin/products");
    }
}
