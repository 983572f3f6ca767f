//! Locator maps whose extent is in projected meters.

use std::sync::Arc;

use tracing::info;

use projection::ProjectionTransform;
use scene_common::{GeographicCoordinate, ProjectedCoordinate};
use wrs::NavigationModel;

use crate::config::LocatorMapConfig;
use crate::error::{LocatorMapError, Result};
use crate::frame::RasterFrame;
use crate::images::MapImages;
use crate::map::LocatorMap;

/// Locator map on a raster in a metric projection (sinusoidal, polar
/// stereographic).
///
/// Pixels map linearly onto projected meters; the configured transform
/// carries them to and from latitude/longitude.
#[derive(Debug)]
pub struct ProjectedLocatorMap {
    config: LocatorMapConfig,
    frame: RasterFrame,
    navigation: Arc<dyn NavigationModel>,
    projection: Arc<dyn ProjectionTransform>,
    images: MapImages,
    center: GeographicCoordinate,
}

impl ProjectedLocatorMap {
    pub fn new(
        config: LocatorMapConfig,
        navigation: Arc<dyn NavigationModel>,
        images: MapImages,
    ) -> Result<Self> {
        config.validate()?;
        if config.projection.is_geographic() {
            return Err(LocatorMapError::invalid_extent(
                "geographic extent given to a projected locator map",
            ));
        }
        let frame = RasterFrame::new(&config.extent, config.width, config.height, false);
        let mut map = Self {
            projection: config.projection.build(),
            config,
            frame,
            navigation,
            images,
            center: GeographicCoordinate::default(),
        };
        map.center = map.frame_to_geographic(frame.center_x(), frame.center_y());
        Ok(map)
    }
}

impl LocatorMap for ProjectedLocatorMap {
    fn config(&self) -> &LocatorMapConfig {
        &self.config
    }

    fn frame(&self) -> &RasterFrame {
        &self.frame
    }

    fn navigation_model(&self) -> &dyn NavigationModel {
        self.navigation.as_ref()
    }

    fn projection(&self) -> &Arc<dyn ProjectionTransform> {
        &self.projection
    }

    fn images(&self) -> &MapImages {
        &self.images
    }

    fn frame_to_geographic(&self, fx: f64, fy: f64) -> GeographicCoordinate {
        self.projection
            .to_geographic(ProjectedCoordinate::new(fx.round() as i64, fy.round() as i64))
    }

    fn geographic_to_frame(&self, coord: GeographicCoordinate) -> (f64, f64) {
        let projected = self.projection.to_projected(coord);
        (projected.x as f64, projected.y as f64)
    }

    fn center(&self) -> GeographicCoordinate {
        self.center
    }

    fn set_center(&mut self, center: GeographicCoordinate) {
        self.center = center;
    }

    fn cleanup(mut self: Box<Self>) {
        info!(map = self.config.name.as_str(), "Cleaning up locator map");
        self.images.release();
    }
}
