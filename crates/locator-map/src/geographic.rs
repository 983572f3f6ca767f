//! Locator maps whose extent is latitude/longitude.

use std::sync::Arc;

use tracing::info;

use projection::ProjectionTransform;
use scene_common::{wrap_longitude, GeographicCoordinate};
use wrs::NavigationModel;

use crate::config::LocatorMapConfig;
use crate::error::{LocatorMapError, Result};
use crate::frame::RasterFrame;
use crate::images::MapImages;
use crate::map::LocatorMap;

/// Locator map on a plate carrée raster.
///
/// Extent units are degrees. When the extent crosses the antimeridian,
/// longitudes are unwrapped around the extent's centre going in and wrapped
/// into `[-180, 180)` coming out, so the raster edges join across ±180°.
#[derive(Debug)]
pub struct GeographicLocatorMap {
    config: LocatorMapConfig,
    frame: RasterFrame,
    navigation: Arc<dyn NavigationModel>,
    projection: Arc<dyn ProjectionTransform>,
    images: MapImages,
    center: GeographicCoordinate,
}

impl GeographicLocatorMap {
    pub fn new(
        config: LocatorMapConfig,
        navigation: Arc<dyn NavigationModel>,
        images: MapImages,
    ) -> Result<Self> {
        config.validate()?;
        if !config.projection.is_geographic() {
            return Err(LocatorMapError::invalid_extent(format!(
                "{} extent given to a geographic locator map",
                config.projection.name()
            )));
        }
        let frame = RasterFrame::new(
            &config.extent,
            config.width,
            config.height,
            config.crosses_antimeridian,
        );
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

impl LocatorMap for GeographicLocatorMap {
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
        let longitude = if self.frame.is_cyclic() {
            wrap_longitude(fx)
        } else {
            fx
        };
        GeographicCoordinate::new(fy, longitude)
    }

    fn geographic_to_frame(&self, coord: GeographicCoordinate) -> (f64, f64) {
        let fx = if self.frame.is_cyclic() {
            let center = self.frame.center_x();
            center + wrap_longitude(coord.longitude - center)
        } else {
            coord.longitude
        };
        (fx, coord.latitude)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use wrs::NavigationModelKind;

    fn map(config: LocatorMapConfig) -> GeographicLocatorMap {
        GeographicLocatorMap::new(config, NavigationModelKind::Wrs2.build(), MapImages::default())
            .unwrap()
    }

    #[test]
    fn test_world_edges() {
        let world = map(presets::world());
        let left = world.pixel_to_geographic(0, 0);
        assert_eq!(left.longitude, -180.0);
        assert_eq!(left.latitude, 90.0);

        let right = world.pixel_to_geographic(1006, 251);
        assert!((right.longitude - (180.0 - 360.0 / 1007.0)).abs() < 1e-9);
    }

    #[test]
    fn test_initial_center_is_extent_center() {
        let na = map(presets::north_america());
        let center = na.center();
        assert!((center.longitude - (-128.04 - 60.74) / 2.0).abs() < 1e-9);
        assert!((center.latitude - 34.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_projected_config() {
        let result = GeographicLocatorMap::new(
            presets::antarctica(),
            NavigationModelKind::Wrs2.build(),
            MapImages::default(),
        );
        assert!(matches!(result, Err(LocatorMapError::InvalidExtent(_))));
    }

    #[test]
    fn test_antimeridian_continuity() {
        let pacific = map(presets::pacific());
        // 0.1 degrees per pixel from 150E
        let before = pacific.pixel_to_geographic(299, 0);
        let after = pacific.pixel_to_geographic(301, 0);
        assert!((before.longitude - 179.9).abs() < 1e-9);
        assert!((after.longitude + 179.9).abs() < 1e-9);

        assert_eq!(
            pacific.geographic_to_pixel(GeographicCoordinate::new(0.0, -170.0)).x,
            400
        );
        assert_eq!(
            pacific.geographic_to_pixel(GeographicCoordinate::new(0.0, 170.0)).x,
            200
        );
    }

    #[test]
    fn test_non_cyclic_extrapolates() {
        let na = map(presets::north_america());
        let west = na.pixel_to_geographic(-1000, 0);
        assert!(west.longitude < -180.0);
    }
}
