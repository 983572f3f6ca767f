//! Progress reporting for long-running background work.
//!
//! Workers update a shared `ProgressTracker`; the UI thread polls it through
//! the `WorkProgress` view.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Read-only view of a unit of background work.
pub trait WorkProgress: Send + Sync {
    /// What is being worked on.
    fn label(&self) -> String;

    /// Total units of work.
    fn total(&self) -> u64;

    /// Units finished so far.
    fn complete(&self) -> u64;

    /// Whether the work is still running.
    fn is_working(&self) -> bool;

    /// Fraction complete in `0.0..=1.0`; zero-unit work counts as done.
    fn fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            1.0
        } else {
            (self.complete() as f64 / total as f64).min(1.0)
        }
    }
}

/// Atomic progress counters shared between a worker and its observers.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    label: Mutex<String>,
    total: AtomicU64,
    complete: AtomicU64,
    working: AtomicBool,
}

impl ProgressTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Reset counters and mark work as started.
    pub fn start(&self, label: impl Into<String>, total: u64) {
        if let Ok(mut current) = self.label.lock() {
            *current = label.into();
        }
        self.total.store(total, Ordering::Relaxed);
        self.complete.store(0, Ordering::Relaxed);
        self.working.store(true, Ordering::Release);
    }

    /// Record `units` more units of finished work.
    pub fn advance(&self, units: u64) {
        self.complete.fetch_add(units, Ordering::Relaxed);
    }

    /// Mark work as stopped, whether finished or abandoned.
    pub fn finish(&self) {
        self.working.store(false, Ordering::Release);
    }
}

impl WorkProgress for ProgressTracker {
    fn label(&self) -> String {
        self.label
            .lock()
            .map(|label| label.clone())
            .unwrap_or_default()
    }

    fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    fn complete(&self) -> u64 {
        self.complete.load(Ordering::Relaxed)
    }

    fn is_working(&self) -> bool {
        self.working.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let progress = ProgressTracker::new();
        assert!(!progress.is_working());
        assert_eq!(progress.fraction(), 1.0);

        progress.start("Filtering scenes", 4);
        assert!(progress.is_working());
        assert_eq!(progress.label(), "Filtering scenes");
        progress.advance(1);
        progress.advance(2);
        assert_eq!(progress.complete(), 3);
        assert!((progress.fraction() - 0.75).abs() < 1e-12);

        progress.finish();
        assert!(!progress.is_working());
    }

    #[test]
    fn test_restart_resets_counts() {
        let progress = ProgressTracker::new();
        progress.start("a", 10);
        progress.advance(10);
        progress.start("b", 5);
        assert_eq!(progress.complete(), 0);
        assert_eq!(progress.total(), 5);
    }

    #[test]
    fn test_shared_between_threads() {
        let progress = ProgressTracker::new();
        progress.start("count", 400);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let progress = Arc::clone(&progress);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        progress.advance(1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(progress.complete(), 400);
    }
}
