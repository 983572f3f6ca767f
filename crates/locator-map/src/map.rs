//! The locator map contract.

use std::fmt::{self, Debug};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use projection::ProjectionTransform;
use scene_common::{GeographicCoordinate, GridCell};
use wrs::NavigationModel;

use crate::config::LocatorMapConfig;
use crate::frame::RasterFrame;
use crate::images::MapImages;

/// A raster pixel position. Values outside the raster are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn from_fractional((x, y): (f64, f64)) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of a click-driven recentre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// New view centre
    pub target: GeographicCoordinate,
    /// Grid cell under the new centre
    pub cell: GridCell,
    /// The click fell outside the extent and was pulled back by the bumper
    pub clamped: bool,
}

/// Mapping between a reference raster's pixels, geographic coordinates and
/// grid cells, plus the view centre it tracks.
///
/// Implementations supply the conversion between extent units and
/// geographic coordinates; pixel, grid and navigation operations are built
/// on top. Queries never fail: pixels outside the raster extrapolate.
///
/// [`LocatorMap::cleanup`] consumes the map, so no query can follow it.
pub trait LocatorMap: Send + Debug {
    fn config(&self) -> &LocatorMapConfig;

    fn frame(&self) -> &RasterFrame;

    fn navigation_model(&self) -> &dyn NavigationModel;

    /// Transform for the map's projected units.
    fn projection(&self) -> &Arc<dyn ProjectionTransform>;

    fn images(&self) -> &MapImages;

    /// Geographic position of a point in extent units.
    fn frame_to_geographic(&self, fx: f64, fy: f64) -> GeographicCoordinate;

    /// Extent units of a geographic position.
    fn geographic_to_frame(&self, coord: GeographicCoordinate) -> (f64, f64);

    /// Current view centre.
    fn center(&self) -> GeographicCoordinate;

    /// Replace the view centre without clamping.
    fn set_center(&mut self, center: GeographicCoordinate);

    /// Release both rasters and retire the map.
    fn cleanup(self: Box<Self>);

    fn pixel_to_geographic(&self, x: i32, y: i32) -> GeographicCoordinate {
        let (fx, fy) = self.frame().pixel_to_frame(x as f64, y as f64);
        self.frame_to_geographic(fx, fy)
    }

    fn geographic_to_pixel(&self, coord: GeographicCoordinate) -> Pixel {
        let (fx, fy) = self.geographic_to_frame(coord);
        Pixel::from_fractional(self.frame().frame_to_pixel(fx, fy))
    }

    fn pixel_to_grid(&self, x: i32, y: i32) -> GridCell {
        self.navigation_model()
            .geographic_to_grid(self.pixel_to_geographic(x, y))
    }

    fn grid_to_pixel(&self, cell: GridCell) -> Pixel {
        self.geographic_to_pixel(self.navigation_model().grid_to_geographic(cell))
    }

    /// Recentre on a clicked pixel, holding the target inside the extent
    /// when the bumper is on.
    fn move_to(&mut self, x: i32, y: i32) -> MoveOutcome {
        let requested = self.frame().pixel_to_frame(x as f64, y as f64);
        let (fx, fy) = if self.config().bumper {
            self.frame().clamp(requested.0, requested.1)
        } else {
            requested
        };
        let clamped = (fx, fy) != requested;
        let target = self.frame_to_geographic(fx, fy);
        let cell = self.navigation_model().geographic_to_grid(target);
        self.set_center(target);

        debug!(
            map = self.config().name.as_str(),
            pixel = %Pixel::new(x, y),
            %target,
            %cell,
            clamped,
            "Locator map recentred"
        );
        MoveOutcome {
            target,
            cell,
            clamped,
        }
    }

    fn center_pixel(&self) -> Pixel {
        self.geographic_to_pixel(self.center())
    }

    /// Pixel corners of a cell's footprint in screen order.
    fn cell_outline(&self, cell: GridCell) -> [Pixel; 4] {
        self.navigation_model()
            .cell_footprint(cell)
            .map(|corner| self.geographic_to_pixel(corner))
    }
}
