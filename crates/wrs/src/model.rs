//! The navigation model contract.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::trace;

use scene_common::{GeographicCoordinate, GridCell};

use crate::window::wrap_into_window;

/// One-cell moves on the grid, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Mapping between path/row grid cells and the ground they cover.
///
/// Models are stateless strategy objects selected once per dataset and
/// shared, typically as `Arc<dyn NavigationModel>`. Every integer row or
/// path is accepted; out-of-window values are normalized, never rejected.
pub trait NavigationModel: Send + Sync + Debug {
    /// Display name, e.g. "WRS-2 Ascending".
    fn name(&self) -> &'static str;

    /// First valid row (inclusive).
    fn minimum_row(&self) -> i32;

    /// Last valid row (inclusive).
    fn maximum_row(&self) -> i32;

    /// Amount added or subtracted when a row leaves the valid window.
    fn row_period(&self) -> i32;

    /// First valid path (inclusive).
    fn minimum_path(&self) -> i32 {
        1
    }

    /// Last valid path (inclusive).
    fn maximum_path(&self) -> i32;

    /// Row increment that moves one cell down the screen: `+1` or `-1`.
    fn row_down_direction(&self) -> i32;

    /// Scene centre of a fractional path/row.
    fn fractional_to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate;

    /// Fractional path/row whose scene centre is `coord`.
    fn fractional_grid(&self, coord: GeographicCoordinate) -> (f64, f64);

    /// Normalize a row into `[minimum_row, maximum_row]` by whole periods.
    fn check_row_bounds(&self, row: i32) -> i32 {
        wrap_into_window(row, self.minimum_row(), self.maximum_row(), self.row_period())
    }

    /// Normalize a path into `[minimum_path, maximum_path]`.
    ///
    /// Paths wrap once around the globe.
    fn check_path_bounds(&self, path: i32) -> i32 {
        let min = self.minimum_path();
        let max = self.maximum_path();
        wrap_into_window(path, min, max, max - min + 1)
    }

    /// Scene centre of a grid cell.
    fn grid_to_geographic(&self, cell: GridCell) -> GeographicCoordinate {
        self.fractional_to_geographic(cell.path as f64, cell.row as f64)
    }

    /// Grid cell whose scene centre is nearest to `coord`.
    ///
    /// The row is clamped to the model's window since positions past the
    /// end of a half-orbit belong to its last row, not to the far side of
    /// the window.
    fn geographic_to_grid(&self, coord: GeographicCoordinate) -> GridCell {
        let (path, row) = self.fractional_grid(coord);
        GridCell::new(
            self.check_path_bounds(path.round() as i32),
            (row.round() as i32).clamp(self.minimum_row(), self.maximum_row()),
        )
    }

    /// Neighbouring cell one step in `direction`, wrapped into range.
    ///
    /// Paths are numbered westward, so moving right decreases the path.
    fn step(&self, cell: GridCell, direction: GridDirection) -> GridCell {
        // Normalize first so the one-cell offset cannot overflow.
        let path = self.check_path_bounds(cell.path);
        let row = self.check_row_bounds(cell.row);
        let (path, row) = match direction {
            GridDirection::Up => (path, row - self.row_down_direction()),
            GridDirection::Down => (path, row + self.row_down_direction()),
            GridDirection::Left => (path + 1, row),
            GridDirection::Right => (path - 1, row),
        };
        let next = GridCell::new(self.check_path_bounds(path), self.check_row_bounds(row));
        trace!(model = self.name(), from = %cell, to = %next, ?direction, "Grid step");
        next
    }

    /// Ground corners of a cell: upper-left, upper-right, lower-right,
    /// lower-left in screen order.
    fn cell_footprint(&self, cell: GridCell) -> [GeographicCoordinate; 4] {
        let path = cell.path as f64;
        let row = cell.row as f64;
        let up = -0.5 * self.row_down_direction() as f64;
        [
            self.fractional_to_geographic(path + 0.5, row + up),
            self.fractional_to_geographic(path - 0.5, row + up),
            self.fractional_to_geographic(path - 0.5, row - up),
            self.fractional_to_geographic(path + 0.5, row - up),
        ]
    }
}
