//! The scene date cursor.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use scene_common::{GeoError, GridCell, ProgressTracker, YearMonth};

use crate::catalog::{SceneCatalog, SceneDateEntry};
use crate::error::{FilterError, Result};
use crate::job::{evaluate, FilterJob};
use crate::predicate::ScenePredicate;
use crate::snapshot::VisibilitySnapshot;

/// Forward/backward cursor over the dated scenes of grid cells.
///
/// Each visited cell keeps its own cursor, a position in that cell's
/// chronological scene list that always points at a visible scene, or is
/// empty when the cell has none. Stepping and jumping skip hidden scenes and
/// are no-ops when no target exists. Steps move by date: scenes sharing an
/// acquisition day count as one date.
///
/// A cell's cursor starts on its most recent visible scene.
#[derive(Debug)]
pub struct SceneDateFilter {
    catalog: Arc<SceneCatalog>,
    visibility: VisibilitySnapshot,
    active_cell: Option<GridCell>,
    cursors: HashMap<GridCell, Option<usize>>,
}

impl SceneDateFilter {
    /// Start with every scene visible and no active cell.
    pub fn new(catalog: Arc<SceneCatalog>) -> Self {
        Self {
            visibility: VisibilitySnapshot::all_visible(catalog.len()),
            catalog,
            active_cell: None,
            cursors: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<SceneCatalog> {
        &self.catalog
    }

    pub fn visibility(&self) -> &VisibilitySnapshot {
        &self.visibility
    }

    pub fn active_cell(&self) -> Option<GridCell> {
        self.active_cell
    }

    /// Make `cell` the target of the unscoped operations.
    pub fn set_active_cell(&mut self, cell: GridCell) {
        self.active_cell = Some(cell);
        let position = self.cursor(cell);
        debug!(%cell, date = ?self.date_at(cell, position), "Active cell set");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Date under the active cell's cursor.
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_scene().map(|scene| scene.date)
    }

    /// Scene under the active cell's cursor.
    pub fn current_scene(&self) -> Option<&SceneDateEntry> {
        let cell = self.active_cell?;
        let position = self.cursors.get(&cell).copied().flatten()?;
        self.scene_at(cell, position)
    }

    /// Date under the cursor of `cell`, if it has been visited.
    pub fn current_date_for(&self, cell: GridCell) -> Option<NaiveDate> {
        let position = self.cursors.get(&cell).copied().flatten()?;
        self.scene_at(cell, position).map(|scene| scene.date)
    }

    /// Distinct visible dates of the active cell, oldest first.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        let Some(cell) = self.active_cell else {
            return Vec::new();
        };
        let mut dates: Vec<NaiveDate> = self
            .catalog
            .cell_indices(cell)
            .iter()
            .filter(|&&index| self.visibility.is_visible(index))
            .map(|&index| self.catalog.scenes()[index].date)
            .collect();
        dates.dedup();
        dates
    }

    /// Scenes hidden by predicate failures in the last applied filter.
    pub fn last_filter_failures(&self) -> usize {
        self.visibility.failures()
    }

    /// First acquisition year of the active cell, hidden scenes included.
    pub fn first_year(&self) -> Option<i32> {
        self.catalog.year_range(self.active_cell?).map(|(first, _)| first)
    }

    /// Last acquisition year of the active cell, hidden scenes included.
    pub fn last_year(&self) -> Option<i32> {
        self.catalog.year_range(self.active_cell?).map(|(_, last)| last)
    }

    pub fn is_next_date_available(&self) -> bool {
        self.active_cell
            .is_some_and(|cell| self.next_position(cell).is_some())
    }

    pub fn is_prev_date_available(&self) -> bool {
        self.active_cell
            .is_some_and(|cell| self.prev_position(cell).is_some())
    }

    /// Whether the cell of `scene` has a visible date after `scene.date`.
    pub fn is_next_date_available_for(&self, scene: &SceneDateEntry) -> bool {
        self.visible_after(scene.cell, scene.date).is_some()
    }

    /// Whether the cell of `scene` has a visible date before `scene.date`.
    pub fn is_prev_date_available_for(&self, scene: &SceneDateEntry) -> bool {
        self.visible_before(scene.cell, scene.date).is_some()
    }

    // ========================================================================
    // Cursor movement
    // ========================================================================

    /// Step the active cell to its next visible date.
    pub fn next_date(&mut self) -> bool {
        match self.active_cell {
            Some(cell) => self.step_next(cell),
            None => false,
        }
    }

    /// Step the active cell to its previous visible date.
    pub fn prev_date(&mut self) -> bool {
        match self.active_cell {
            Some(cell) => self.step_prev(cell),
            None => false,
        }
    }

    /// Move the cursor of the cell of `scene` to the first visible date
    /// after `scene.date`, leaving the active cell alone.
    ///
    /// The step is taken from the given scene, not from the cell's stored
    /// cursor.
    pub fn next_date_for(&mut self, scene: &SceneDateEntry) -> bool {
        let target = self.visible_after(scene.cell, scene.date);
        self.move_cursor(scene.cell, target, "next date")
    }

    /// Move the cursor of the cell of `scene` to the last visible date
    /// before `scene.date`, leaving the active cell alone.
    pub fn prev_date_for(&mut self, scene: &SceneDateEntry) -> bool {
        let target = self.visible_before(scene.cell, scene.date);
        self.move_cursor(scene.cell, target, "previous date")
    }

    /// Jump to the first visible date in or after `year`/`month`, or to the
    /// last visible date when there is none.
    pub fn goto_date(&mut self, year: i32, month: u32) -> std::result::Result<bool, GeoError> {
        let target = YearMonth::new(year, month)?;
        Ok(self.goto_year_month(target))
    }

    pub fn goto_year_month(&mut self, target: YearMonth) -> bool {
        let Some(cell) = self.active_cell else {
            return false;
        };
        let position = self
            .visible_positions(cell)
            .find(|&position| {
                self.scene_at(cell, position)
                    .is_some_and(|scene| target.starts_on_or_before(scene.date))
            })
            .or_else(|| self.visible_positions(cell).next_back());
        self.move_cursor(cell, position, "goto date")
    }

    pub fn goto_first_date(&mut self) -> bool {
        let Some(cell) = self.active_cell else {
            return false;
        };
        let position = self.visible_positions(cell).next();
        self.move_cursor(cell, position, "first date")
    }

    pub fn goto_last_date(&mut self) -> bool {
        let Some(cell) = self.active_cell else {
            return false;
        };
        let position = self.visible_positions(cell).next_back();
        self.move_cursor(cell, position, "last date")
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Recompute visibility with `predicate` and apply it.
    ///
    /// Returns the number of scenes hidden by predicate failures.
    pub fn filter(&mut self, predicate: &dyn ScenePredicate) -> usize {
        let never = AtomicBool::new(false);
        match evaluate(&self.catalog, predicate, &never, &ProgressTracker::default()) {
            Ok(snapshot) => {
                let failures = snapshot.failures();
                self.replace_visibility(snapshot);
                failures
            }
            // Never cancelled
            Err(_) => 0,
        }
    }

    /// Run a filter pass for this catalog on a worker thread.
    pub fn filter_in_background(
        &self,
        predicate: Arc<dyn ScenePredicate>,
        progress: Arc<ProgressTracker>,
    ) -> FilterJob {
        FilterJob::spawn(Arc::clone(&self.catalog), predicate, progress)
    }

    /// Swap in a completed snapshot and repair cursors.
    pub fn apply_snapshot(&mut self, snapshot: VisibilitySnapshot) -> Result<()> {
        if snapshot.len() != self.catalog.len() {
            return Err(FilterError::SnapshotMismatch {
                expected: self.catalog.len(),
                actual: snapshot.len(),
            });
        }
        self.replace_visibility(snapshot);
        Ok(())
    }

    fn replace_visibility(&mut self, snapshot: VisibilitySnapshot) {
        self.visibility = snapshot;
        let cells: Vec<GridCell> = self.cursors.keys().copied().collect();
        for cell in cells {
            let repaired = self.repair(cell);
            self.cursors.insert(cell, repaired);
        }
        info!(
            filter = self.visibility.label(),
            visible = self.visibility.visible_count(),
            failures = self.visibility.failures(),
            "Scene visibility updated"
        );
    }

    /// Keep a visible cursor; otherwise stay on the same date if another
    /// scene of that day is visible, else take the nearest later visible
    /// date, then the nearest earlier one.
    fn repair(&self, cell: GridCell) -> Option<usize> {
        let Some(position) = self.cursors.get(&cell).copied().flatten() else {
            return self.latest_visible(cell);
        };
        if self.is_visible_at(cell, position) {
            return Some(position);
        }
        let date = self.scene_at(cell, position)?.date;
        self.visible_positions(cell)
            .find(|&p| self.date_at(cell, Some(p)).is_some_and(|d| d >= date))
            .or_else(|| self.visible_before(cell, date))
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Cursor of `cell`, creating it on first visit.
    fn cursor(&mut self, cell: GridCell) -> Option<usize> {
        if let Some(&position) = self.cursors.get(&cell) {
            return position;
        }
        let position = self.latest_visible(cell);
        self.cursors.insert(cell, position);
        position
    }

    /// Read-only cursor: the stored one, or where a first visit would land.
    fn peek_cursor(&self, cell: GridCell) -> Option<usize> {
        match self.cursors.get(&cell) {
            Some(&position) => position,
            None => self.latest_visible(cell),
        }
    }

    fn next_position(&self, cell: GridCell) -> Option<usize> {
        self.next_position_from(cell, self.peek_cursor(cell)?)
    }

    fn prev_position(&self, cell: GridCell) -> Option<usize> {
        self.prev_position_from(cell, self.peek_cursor(cell)?)
    }

    fn next_position_from(&self, cell: GridCell, position: usize) -> Option<usize> {
        self.visible_after(cell, self.scene_at(cell, position)?.date)
    }

    fn prev_position_from(&self, cell: GridCell, position: usize) -> Option<usize> {
        self.visible_before(cell, self.scene_at(cell, position)?.date)
    }

    /// First visible position dated strictly after `date`.
    fn visible_after(&self, cell: GridCell, date: NaiveDate) -> Option<usize> {
        self.visible_positions(cell)
            .find(|&p| self.date_at(cell, Some(p)).is_some_and(|d| d > date))
    }

    /// Last visible position dated strictly before `date`.
    fn visible_before(&self, cell: GridCell, date: NaiveDate) -> Option<usize> {
        self.visible_positions(cell)
            .rev()
            .find(|&p| self.date_at(cell, Some(p)).is_some_and(|d| d < date))
    }

    fn latest_visible(&self, cell: GridCell) -> Option<usize> {
        self.visible_positions(cell).next_back()
    }

    /// Positions within the cell's scene list that are visible, ascending.
    fn visible_positions(&self, cell: GridCell) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.catalog
            .cell_indices(cell)
            .iter()
            .enumerate()
            .filter(|(_, &index)| self.visibility.is_visible(index))
            .map(|(position, _)| position)
    }

    fn is_visible_at(&self, cell: GridCell, position: usize) -> bool {
        self.catalog
            .cell_indices(cell)
            .get(position)
            .is_some_and(|&index| self.visibility.is_visible(index))
    }

    fn scene_at(&self, cell: GridCell, position: usize) -> Option<&SceneDateEntry> {
        let index = *self.catalog.cell_indices(cell).get(position)?;
        self.catalog.get(index)
    }

    fn date_at(&self, cell: GridCell, position: Option<usize>) -> Option<NaiveDate> {
        position
            .and_then(|p| self.scene_at(cell, p))
            .map(|scene| scene.date)
    }

    fn step_next(&mut self, cell: GridCell) -> bool {
        self.cursor(cell);
        let target = self.next_position(cell);
        self.move_cursor(cell, target, "next date")
    }

    fn step_prev(&mut self, cell: GridCell) -> bool {
        self.cursor(cell);
        let target = self.prev_position(cell);
        self.move_cursor(cell, target, "previous date")
    }

    fn move_cursor(&mut self, cell: GridCell, target: Option<usize>, action: &str) -> bool {
        let Some(position) = target else {
            debug!(%cell, action, "No date to move to");
            return false;
        };
        self.cursors.insert(cell, Some(position));
        debug!(%cell, action, date = ?self.date_at(cell, target), "Scene cursor moved");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::CloudCoverPredicate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const CELL: GridCell = GridCell { path: 29, row: 30 };

    fn filter_with(dates: &[(NaiveDate, u8)]) -> SceneDateFilter {
        let catalog: SceneCatalog = dates
            .iter()
            .enumerate()
            .map(|(i, &(d, cloud))| {
                SceneDateEntry::new(format!("scene-{i}"), CELL, d).with_cloud_cover(cloud)
            })
            .collect();
        let mut filter = SceneDateFilter::new(Arc::new(catalog));
        filter.set_active_cell(CELL);
        filter
    }

    #[test]
    fn test_starts_on_latest() {
        let filter = filter_with(&[(date(2000, 1, 1), 0), (date(2001, 1, 1), 0)]);
        assert_eq!(filter.current_date(), Some(date(2001, 1, 1)));
        assert!(!filter.is_next_date_available());
        assert!(filter.is_prev_date_available());
    }

    #[test]
    fn test_steps_skip_hidden() {
        let mut filter = filter_with(&[
            (date(2000, 1, 1), 10),
            (date(2000, 2, 1), 90),
            (date(2000, 3, 1), 10),
        ]);
        filter.filter(&CloudCoverPredicate::new(50));
        filter.goto_first_date();
        assert!(filter.next_date());
        assert_eq!(filter.current_date(), Some(date(2000, 3, 1)));
        assert!(filter.prev_date());
        assert_eq!(filter.current_date(), Some(date(2000, 1, 1)));
        assert!(!filter.prev_date());
        assert_eq!(filter.current_date(), Some(date(2000, 1, 1)));
    }

    #[test]
    fn test_same_day_scenes_are_one_date() {
        let mut filter = filter_with(&[
            (date(2000, 1, 1), 0),
            (date(2000, 2, 1), 0),
            (date(2000, 2, 1), 0),
        ]);
        filter.goto_first_date();
        assert!(filter.next_date());
        assert_eq!(filter.current_date(), Some(date(2000, 2, 1)));
        assert!(!filter.is_next_date_available());
        assert!(!filter.next_date());
        assert_eq!(filter.current_date(), Some(date(2000, 2, 1)));

        filter.goto_last_date();
        assert!(filter.prev_date());
        assert_eq!(filter.current_date(), Some(date(2000, 1, 1)));
        assert_eq!(filter.visible_dates(), vec![date(2000, 1, 1), date(2000, 2, 1)]);
    }

    #[test]
    fn test_repair_prefers_same_day_scene() {
        let mut filter = filter_with(&[
            (date(2000, 1, 1), 0),
            (date(2000, 2, 1), 10),
            (date(2000, 2, 1), 90),
            (date(2000, 3, 1), 0),
        ]);
        filter.goto_last_date();
        filter.prev_date();
        assert_eq!(filter.current_date(), Some(date(2000, 2, 1)));
        assert_eq!(filter.current_scene().map(|s| s.id.as_str()), Some("scene-2"));

        filter.filter(&CloudCoverPredicate::new(50));
        assert_eq!(filter.current_scene().map(|s| s.id.as_str()), Some("scene-1"));
    }

    #[test]
    fn test_goto_date() {
        let mut filter = filter_with(&[
            (date(1999, 11, 20), 0),
            (date(2000, 2, 3), 0),
            (date(2000, 6, 9), 0),
        ]);
        assert_eq!(filter.goto_date(2000, 1), Ok(true));
        assert_eq!(filter.current_date(), Some(date(2000, 2, 3)));
        assert_eq!(filter.goto_date(2000, 6), Ok(true));
        assert_eq!(filter.current_date(), Some(date(2000, 6, 9)));
        assert_eq!(filter.goto_date(1980, 1), Ok(true));
        assert_eq!(filter.current_date(), Some(date(1999, 11, 20)));
        // Past the end lands on the last visible date
        assert_eq!(filter.goto_date(2010, 1), Ok(true));
        assert_eq!(filter.current_date(), Some(date(2000, 6, 9)));
        assert_eq!(filter.goto_date(2000, 13), Err(GeoError::InvalidMonth(13)));
    }

    #[test]
    fn test_filter_repairs_cursor_forward_then_back() {
        let mut filter = filter_with(&[
            (date(2000, 1, 1), 10),
            (date(2000, 2, 1), 90),
            (date(2000, 3, 1), 10),
            (date(2000, 4, 1), 90),
        ]);
        filter.goto_date(2000, 2).unwrap();
        assert_eq!(filter.current_date(), Some(date(2000, 2, 1)));

        filter.filter(&CloudCoverPredicate::new(50));
        assert_eq!(filter.current_date(), Some(date(2000, 3, 1)));

        filter.filter(&CloudCoverPredicate::new(100));
        filter.goto_last_date();
        filter.filter(&CloudCoverPredicate::new(50));
        assert_eq!(filter.current_date(), Some(date(2000, 3, 1)));
    }

    #[test]
    fn test_filter_keeps_visible_cursor() {
        let mut filter = filter_with(&[(date(2000, 1, 1), 10), (date(2000, 2, 1), 10)]);
        filter.goto_first_date();
        filter.filter(&CloudCoverPredicate::new(20));
        assert_eq!(filter.current_date(), Some(date(2000, 1, 1)));
    }

    #[test]
    fn test_years_include_hidden() {
        let mut filter = filter_with(&[
            (date(1984, 5, 1), 95),
            (date(1990, 5, 1), 5),
            (date(2011, 5, 1), 95),
        ]);
        filter.filter(&CloudCoverPredicate::new(50));
        assert_eq!(filter.visible_dates(), vec![date(1990, 5, 1)]);
        assert_eq!(filter.first_year(), Some(1984));
        assert_eq!(filter.last_year(), Some(2011));
    }

    #[test]
    fn test_all_hidden_then_restored() {
        let mut filter = filter_with(&[(date(2000, 1, 1), 80), (date(2000, 2, 1), 80)]);
        filter.filter(&CloudCoverPredicate::new(10));
        assert_eq!(filter.current_date(), None);
        assert!(!filter.next_date());
        assert!(!filter.goto_first_date());

        filter.filter(&CloudCoverPredicate::new(100));
        assert_eq!(filter.current_date(), Some(date(2000, 2, 1)));
    }

    #[test]
    fn test_empty_cell_is_noop() {
        let mut filter = SceneDateFilter::new(Arc::new(SceneCatalog::default()));
        assert!(!filter.next_date());
        filter.set_active_cell(CELL);
        assert!(!filter.next_date());
        assert!(!filter.prev_date());
        assert!(!filter.goto_last_date());
        assert_eq!(filter.goto_date(2000, 1), Ok(false));
        assert_eq!(filter.current_date(), None);
        assert_eq!(filter.first_year(), None);
        assert!(filter.visible_dates().is_empty());
    }

    #[test]
    fn test_snapshot_size_checked() {
        let mut filter = filter_with(&[(date(2000, 1, 1), 0)]);
        assert_eq!(
            filter.apply_snapshot(VisibilitySnapshot::all_visible(3)),
            Err(FilterError::SnapshotMismatch {
                expected: 1,
                actual: 3
            })
        );
    }
}
