//! Filter passes, inline or on a worker thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use scene_common::ProgressTracker;

use crate::catalog::SceneCatalog;
use crate::error::{FilterError, Result};
use crate::predicate::ScenePredicate;
use crate::snapshot::VisibilitySnapshot;

/// Evaluate `predicate` over every scene in `catalog`.
///
/// Scenes are evaluated in parallel. `cancel` is checked before each scene;
/// once set, the pass stops and returns [`FilterError::Cancelled`]. A scene
/// whose evaluation fails is hidden and counted in the snapshot's failures.
pub fn evaluate(
    catalog: &SceneCatalog,
    predicate: &dyn ScenePredicate,
    cancel: &AtomicBool,
    progress: &ProgressTracker,
) -> Result<VisibilitySnapshot> {
    let label = predicate.describe();
    progress.start(format!("Filtering scenes: {label}"), catalog.len() as u64);

    let outcomes: Option<Vec<_>> = catalog
        .scenes()
        .par_iter()
        .map(|scene| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            let outcome = predicate.evaluate(scene);
            progress.advance(1);
            Some(outcome)
        })
        .collect();
    progress.finish();

    let Some(outcomes) = outcomes else {
        debug!(filter = label.as_str(), "Filter pass cancelled");
        return Err(FilterError::Cancelled);
    };

    let mut failures = 0;
    let visible = outcomes
        .into_iter()
        .map(|outcome| match outcome {
            Ok(shown) => shown,
            Err(e) => {
                warn!(error = %e, "Predicate failed; hiding scene");
                failures += 1;
                false
            }
        })
        .collect();

    let snapshot = VisibilitySnapshot::new(visible, failures, label);
    info!(
        filter = snapshot.label(),
        scenes = snapshot.len(),
        visible = snapshot.visible_count(),
        failures,
        "Filter pass complete"
    );
    Ok(snapshot)
}

/// A filter pass running on its own thread.
///
/// The owning thread polls [`FilterJob::progress`] and collects the result
/// with [`FilterJob::join`]; the job never touches cursor state.
#[derive(Debug)]
pub struct FilterJob {
    cancel: Arc<AtomicBool>,
    progress: Arc<ProgressTracker>,
    handle: JoinHandle<Result<VisibilitySnapshot>>,
}

impl FilterJob {
    pub fn spawn(
        catalog: Arc<SceneCatalog>,
        predicate: Arc<dyn ScenePredicate>,
        progress: Arc<ProgressTracker>,
    ) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let handle = {
            let cancel = Arc::clone(&cancel);
            let progress = Arc::clone(&progress);
            thread::spawn(move || evaluate(&catalog, predicate.as_ref(), &cancel, &progress))
        };
        Self {
            cancel,
            progress,
            handle,
        }
    }

    /// Ask the pass to stop at the next scene boundary.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn progress(&self) -> &Arc<ProgressTracker> {
        &self.progress
    }

    /// Wait for the pass and take its snapshot.
    pub fn join(self) -> Result<VisibilitySnapshot> {
        self.handle.join().map_err(|panic| {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            FilterError::Worker(message)
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SceneDateEntry;
    use crate::error::PredicateError;
    use chrono::NaiveDate;
    use scene_common::{GridCell, WorkProgress};

    fn catalog(n: u32) -> SceneCatalog {
        (1..=n)
            .map(|day| {
                SceneDateEntry::new(
                    format!("s{day}"),
                    GridCell::new(1, 1),
                    NaiveDate::from_ymd_opt(2000, 1, day).unwrap(),
                )
                .with_cloud_cover((day * 3) as u8)
            })
            .collect()
    }

    #[test]
    fn test_failures_hidden_and_counted() {
        let catalog = catalog(10);
        let predicate = |s: &SceneDateEntry| {
            if s.id == "s3" || s.id == "s7" {
                Err(PredicateError::failed(&s.id, "bad metadata"))
            } else {
                Ok(true)
            }
        };
        let snapshot = evaluate(
            &catalog,
            &predicate,
            &AtomicBool::new(false),
            &ProgressTracker::default(),
        )
        .unwrap();
        assert_eq!(snapshot.failures(), 2);
        assert_eq!(snapshot.visible_count(), 8);
        assert!(!snapshot.is_visible(2));
        assert!(!snapshot.is_visible(6));
    }

    #[test]
    fn test_cancelled_before_start() {
        let progress = ProgressTracker::default();
        let result = evaluate(
            &catalog(5),
            &crate::CloudCoverPredicate::new(10),
            &AtomicBool::new(true),
            &progress,
        );
        assert_eq!(result, Err(FilterError::Cancelled));
        assert!(!progress.is_working());
        assert_eq!(progress.complete(), 0);
    }

    #[test]
    fn test_job_reports_progress() {
        let progress = ProgressTracker::new();
        let job = FilterJob::spawn(
            Arc::new(catalog(20)),
            Arc::new(crate::CloudCoverPredicate::new(30)),
            Arc::clone(&progress),
        );
        let snapshot = job.join().unwrap();
        assert_eq!(snapshot.visible_count(), 10);
        assert_eq!(progress.complete(), 20);
        assert_eq!(progress.total(), 20);
        assert!(progress.label().contains("cloud cover"));
    }

    #[test]
    fn test_job_worker_panic() {
        let job = FilterJob::spawn(
            Arc::new(catalog(3)),
            Arc::new(|_: &SceneDateEntry| -> std::result::Result<bool, PredicateError> {
                panic!("predicate exploded")
            }),
            ProgressTracker::new(),
        );
        assert!(matches!(job.join(), Err(FilterError::Worker(_))));
    }
}
