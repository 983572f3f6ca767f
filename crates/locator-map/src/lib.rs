//! Locator maps: small reference rasters used to show and pick the current
//! viewing location.
//!
//! A locator map converts between raster pixels, geographic coordinates and
//! grid cells, recentres on clicks, and owns its base-map and overlay
//! raster handles until cleaned up.

pub mod config;
pub mod error;
pub mod frame;
pub mod geographic;
pub mod images;
pub mod map;
pub mod projected;

use std::sync::Arc;

use tracing::info;
use wrs::NavigationModel;

pub use config::{presets, Extent, LocatorMapConfig, ProjectionConfig};
pub use error::{LocatorMapError, Result};
pub use frame::RasterFrame;
pub use geographic::GeographicLocatorMap;
pub use images::{AssetLoader, FsAssetLoader, MapImages, RasterHandle, StaticAssetLoader};
pub use map::{LocatorMap, MoveOutcome, Pixel};
pub use projected::ProjectedLocatorMap;

/// Validate `config`, acquire its rasters and build the matching locator map.
pub fn build_locator_map(
    config: LocatorMapConfig,
    navigation: Arc<dyn NavigationModel>,
    loader: &dyn AssetLoader,
) -> Result<Box<dyn LocatorMap>> {
    config.validate()?;
    let images = MapImages::load(loader, &config)?;
    build_locator_map_with_images(config, navigation, images)
}

/// Build a locator map around rasters that were already acquired, e.g. by
/// [`MapImages::load_in_background`].
pub fn build_locator_map_with_images(
    config: LocatorMapConfig,
    navigation: Arc<dyn NavigationModel>,
    images: MapImages,
) -> Result<Box<dyn LocatorMap>> {
    let map: Box<dyn LocatorMap> = if config.projection.is_geographic() {
        Box::new(GeographicLocatorMap::new(config, navigation, images)?)
    } else {
        Box::new(ProjectedLocatorMap::new(config, navigation, images)?)
    };
    info!(
        map = map.config().name.as_str(),
        projection = map.config().projection.name(),
        model = map.navigation_model().name(),
        width = map.config().width,
        height = map.config().height,
        "Locator map ready"
    );
    Ok(map)
}
