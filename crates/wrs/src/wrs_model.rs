//! World Reference System navigation models.
//!
//! `WrsModel` covers the full orbit. The descending and ascending models
//! restrict navigation to one half-orbit: they reuse the base model's
//! path/row geometry but narrow the row window, halve the period and pick
//! the matching screen direction.

use scene_common::GeographicCoordinate;

use crate::model::NavigationModel;
use crate::orbit::{Pass, WrsSystem, ROWS_PER_ORBIT};

/// Rows in one half-orbit.
const HALF_ORBIT_ROWS: i32 = ROWS_PER_ORBIT / 2;

/// Full-orbit WRS grid: rows `[1, 248]`, period 248.
///
/// Geographic lookups resolve to the descending (daytime) pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrsModel {
    system: WrsSystem,
}

impl WrsModel {
    pub fn new(system: WrsSystem) -> Self {
        Self { system }
    }

    pub fn wrs1() -> Self {
        Self::new(WrsSystem::Wrs1)
    }

    pub fn wrs2() -> Self {
        Self::new(WrsSystem::Wrs2)
    }

    pub fn system(&self) -> WrsSystem {
        self.system
    }

    fn to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate {
        self.system.to_geographic(path, row)
    }

    fn to_grid(&self, coord: GeographicCoordinate, pass: Pass) -> (f64, f64) {
        self.system.to_grid(coord, pass)
    }
}

impl NavigationModel for WrsModel {
    fn name(&self) -> &'static str {
        self.system.label()
    }

    fn minimum_row(&self) -> i32 {
        1
    }

    fn maximum_row(&self) -> i32 {
        ROWS_PER_ORBIT
    }

    fn row_period(&self) -> i32 {
        ROWS_PER_ORBIT
    }

    fn maximum_path(&self) -> i32 {
        self.system.path_count()
    }

    fn row_down_direction(&self) -> i32 {
        1
    }

    fn fractional_to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate {
        self.to_geographic(path, row)
    }

    fn fractional_grid(&self, coord: GeographicCoordinate) -> (f64, f64) {
        self.to_grid(coord, Pass::Descending)
    }
}

/// Daytime half-orbit: rows `[1, 124]`, period 124, row increases southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescendingWrsModel {
    base: WrsModel,
}

impl DescendingWrsModel {
    pub fn new(system: WrsSystem) -> Self {
        Self {
            base: WrsModel::new(system),
        }
    }

    pub fn wrs1() -> Self {
        Self::new(WrsSystem::Wrs1)
    }

    pub fn wrs2() -> Self {
        Self::new(WrsSystem::Wrs2)
    }

    pub fn base(&self) -> &WrsModel {
        &self.base
    }
}

impl NavigationModel for DescendingWrsModel {
    fn name(&self) -> &'static str {
        match self.base.system {
            WrsSystem::Wrs1 => "WRS-1 Descending",
            WrsSystem::Wrs2 => "WRS-2 Descending",
        }
    }

    fn minimum_row(&self) -> i32 {
        1
    }

    fn maximum_row(&self) -> i32 {
        HALF_ORBIT_ROWS
    }

    fn row_period(&self) -> i32 {
        HALF_ORBIT_ROWS
    }

    fn maximum_path(&self) -> i32 {
        self.base.maximum_path()
    }

    fn row_down_direction(&self) -> i32 {
        1
    }

    fn fractional_to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate {
        self.base.to_geographic(path, row)
    }

    fn fractional_grid(&self, coord: GeographicCoordinate) -> (f64, f64) {
        self.base.to_grid(coord, Pass::Descending)
    }
}

/// Night half-orbit: rows `[125, 248]`, period 124, row increases northward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AscendingWrsModel {
    base: WrsModel,
}

impl AscendingWrsModel {
    pub fn new(system: WrsSystem) -> Self {
        Self {
            base: WrsModel::new(system),
        }
    }

    pub fn wrs2() -> Self {
        Self::new(WrsSystem::Wrs2)
    }

    pub fn base(&self) -> &WrsModel {
        &self.base
    }
}

impl NavigationModel for AscendingWrsModel {
    fn name(&self) -> &'static str {
        match self.base.system {
            WrsSystem::Wrs1 => "WRS-1 Ascending",
            WrsSystem::Wrs2 => "WRS-2 Ascending",
        }
    }

    fn minimum_row(&self) -> i32 {
        HALF_ORBIT_ROWS + 1
    }

    fn maximum_row(&self) -> i32 {
        ROWS_PER_ORBIT
    }

    fn row_period(&self) -> i32 {
        HALF_ORBIT_ROWS
    }

    fn maximum_path(&self) -> i32 {
        self.base.maximum_path()
    }

    fn row_down_direction(&self) -> i32 {
        -1
    }

    fn fractional_to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate {
        self.base.to_geographic(path, row)
    }

    fn fractional_grid(&self, coord: GeographicCoordinate) -> (f64, f64) {
        self.base.to_grid(coord, Pass::Ascending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridDirection;
    use scene_common::GridCell;

    #[test]
    fn test_ascending_row_bounds() {
        let model = AscendingWrsModel::wrs2();
        assert_eq!(model.minimum_row(), 125);
        assert_eq!(model.maximum_row(), 248);
        assert_eq!(model.check_row_bounds(300), 176);
        assert_eq!(model.check_row_bounds(50), 174);
        assert_eq!(model.check_row_bounds(125), 125);
        assert_eq!(model.check_row_bounds(248), 248);
    }

    #[test]
    fn test_descending_row_bounds() {
        let model = DescendingWrsModel::wrs2();
        assert_eq!(model.check_row_bounds(0), 124);
        assert_eq!(model.check_row_bounds(125), 1);
        assert_eq!(model.check_row_bounds(-124), 124);
        assert_eq!(model.check_row_bounds(60), 60);
    }

    #[test]
    fn test_base_row_bounds() {
        let model = WrsModel::wrs2();
        assert_eq!(model.check_row_bounds(249), 1);
        assert_eq!(model.check_row_bounds(0), 248);
        assert_eq!(model.check_row_bounds(184), 184);
    }

    #[test]
    fn test_path_wraps() {
        let wrs2 = WrsModel::wrs2();
        assert_eq!(wrs2.check_path_bounds(0), 233);
        assert_eq!(wrs2.check_path_bounds(234), 1);
        let wrs1 = WrsModel::wrs1();
        assert_eq!(wrs1.check_path_bounds(252), 1);
        assert_eq!(wrs1.check_path_bounds(-1), 250);
    }

    #[test]
    fn test_directions() {
        assert_eq!(WrsModel::wrs2().row_down_direction(), 1);
        assert_eq!(DescendingWrsModel::wrs2().row_down_direction(), 1);
        assert_eq!(AscendingWrsModel::wrs2().row_down_direction(), -1);
    }

    #[test]
    fn test_step_down_moves_south() {
        for model in [
            &DescendingWrsModel::wrs2() as &dyn NavigationModel,
            &AscendingWrsModel::wrs2(),
        ] {
            let start = if model.row_down_direction() > 0 {
                GridCell::new(30, 40)
            } else {
                GridCell::new(30, 200)
            };
            let below = model.step(start, GridDirection::Down);
            let here = model.grid_to_geographic(start);
            let there = model.grid_to_geographic(below);
            assert!(there.latitude < here.latitude, "{}", model.name());
        }
    }

    #[test]
    fn test_step_wraps_at_window_edges() {
        let model = AscendingWrsModel::wrs2();
        assert_eq!(
            model.step(GridCell::new(10, 125), GridDirection::Down),
            GridCell::new(10, 248)
        );
        assert_eq!(
            model.step(GridCell::new(10, 248), GridDirection::Up),
            GridCell::new(10, 125)
        );
        assert_eq!(
            model.step(GridCell::new(1, 150), GridDirection::Right),
            GridCell::new(233, 150)
        );
        assert_eq!(
            model.step(GridCell::new(233, 150), GridDirection::Left),
            GridCell::new(1, 150)
        );
    }

    #[test]
    fn test_geographic_to_grid_clamps_row_to_window() {
        let model = AscendingWrsModel::wrs2();
        // Beyond the southern apex the ascending branch starts at row 122
        let cell = model.geographic_to_grid(GeographicCoordinate::new(-85.0, 0.0));
        assert_eq!(cell.row, 125);

        let model = DescendingWrsModel::wrs2();
        let cell = model.geographic_to_grid(GeographicCoordinate::new(89.0, 0.0));
        assert_eq!(cell.row, 1);
    }
}
