//! The browse session.

use std::sync::Arc;

use tracing::{debug, info};

use locator_map::{build_locator_map, AssetLoader, LocatorMap, MoveOutcome};
use projection::geographic_bounds;
use scene_common::{GeographicBox, GridCell, ProjectedCoordinate};
use scene_filter::{SceneCatalog, SceneDateFilter};
use wrs::{GridDirection, NavigationModel};

use crate::dataset::DatasetDescriptor;
use crate::error::Result;

/// One dataset being browsed.
///
/// Owned by the UI thread. Clicks and grid steps move the locator view and
/// select the grid cell whose scenes the date filter browses.
#[derive(Debug)]
pub struct BrowseSession {
    dataset: DatasetDescriptor,
    navigation: Arc<dyn NavigationModel>,
    locator: Box<dyn LocatorMap>,
    filter: SceneDateFilter,
    current_cell: Option<GridCell>,
}

impl BrowseSession {
    /// Open `dataset` on its configured locator map.
    pub fn open(
        dataset: &DatasetDescriptor,
        loader: &dyn AssetLoader,
        scenes: Arc<SceneCatalog>,
    ) -> Result<Self> {
        dataset.validate()?;
        let navigation = dataset.navigation_model();
        let locator =
            build_locator_map(dataset.locator_config()?, Arc::clone(&navigation), loader)?;
        info!(
            dataset = dataset.name.as_str(),
            model = navigation.name(),
            scenes = scenes.len(),
            "Browse session opened"
        );
        Ok(Self::with_locator(dataset.clone(), navigation, locator, scenes))
    }

    /// Assemble a session from parts already built.
    pub fn with_locator(
        dataset: DatasetDescriptor,
        navigation: Arc<dyn NavigationModel>,
        locator: Box<dyn LocatorMap>,
        scenes: Arc<SceneCatalog>,
    ) -> Self {
        Self {
            dataset,
            navigation,
            locator,
            filter: SceneDateFilter::new(scenes),
            current_cell: None,
        }
    }

    pub fn dataset(&self) -> &DatasetDescriptor {
        &self.dataset
    }

    pub fn navigation_model(&self) -> &Arc<dyn NavigationModel> {
        &self.navigation
    }

    pub fn locator(&self) -> &dyn LocatorMap {
        self.locator.as_ref()
    }

    pub fn filter(&self) -> &SceneDateFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut SceneDateFilter {
        &mut self.filter
    }

    pub fn current_cell(&self) -> Option<GridCell> {
        self.current_cell
    }

    /// Recentre on a locator click and browse the cell under it.
    pub fn click(&mut self, x: i32, y: i32) -> MoveOutcome {
        let outcome = self.locator.move_to(x, y);
        self.activate(outcome.cell);
        outcome
    }

    /// Move one grid cell and recentre the locator on it.
    ///
    /// Does nothing before a cell has been selected.
    pub fn step(&mut self, direction: GridDirection) -> Option<GridCell> {
        let cell = self.navigation.step(self.current_cell?, direction);
        self.goto_cell(cell);
        Some(cell)
    }

    /// Browse `cell`, normalized into the model's range.
    pub fn goto_cell(&mut self, cell: GridCell) -> GridCell {
        let cell = GridCell::new(
            self.navigation.check_path_bounds(cell.path),
            self.navigation.check_row_bounds(cell.row),
        );
        self.locator
            .set_center(self.navigation.grid_to_geographic(cell));
        self.activate(cell);
        cell
    }

    /// Geographic box enclosing a viewport given in the locator's
    /// projected units.
    pub fn visible_extent(
        &self,
        upper_left: ProjectedCoordinate,
        lower_right: ProjectedCoordinate,
    ) -> GeographicBox {
        geographic_bounds(upper_left, lower_right, self.locator.projection().as_ref())
    }

    /// Release the locator rasters and end the session.
    pub fn close(self) {
        info!(dataset = self.dataset.name.as_str(), "Browse session closed");
        self.locator.cleanup();
    }

    fn activate(&mut self, cell: GridCell) {
        self.current_cell = Some(cell);
        self.filter.set_active_cell(cell);
        debug!(
            %cell,
            date = ?self.filter.current_date(),
            "Browsing cell"
        );
    }
}
