//! Locator-map configuration records.
//!
//! Each record describes one reference raster: its pixel size, the extent
//! it covers, the projection its extent is expressed in, and the assets
//! drawn on it. Records are immutable once loaded and can come from the
//! built-in [`presets`] or from YAML.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use projection::{Geographic, Hemisphere, PolarStereographic, ProjectionTransform, Sinusoidal};

use crate::error::{LocatorMapError, Result};

// ============================================================================
// Records
// ============================================================================

/// Bounds of a locator raster.
///
/// Degrees for geographic maps, projected meters otherwise. `left`/`right`
/// are the west/east (or min/max x) edges and `top`/`bottom` the north/south
/// (or max/min y) edges. An antimeridian-crossing geographic extent has
/// `left > right`, e.g. `150 .. -150`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Horizontal span, going east across ±180° when `cyclic`.
    pub fn horizontal_span(&self, cyclic: bool) -> f64 {
        if cyclic && self.right <= self.left {
            self.right + 360.0 - self.left
        } else {
            self.right - self.left
        }
    }

    pub fn vertical_span(&self) -> f64 {
        self.top - self.bottom
    }

    fn is_finite(&self) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Projection a locator map's extent is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionConfig {
    /// Plain latitude/longitude
    Geographic,
    /// Sinusoidal equal-area on a sphere
    Sinusoidal {
        #[serde(default)]
        central_meridian: f64,
        #[serde(default = "default_sphere_radius")]
        radius: f64,
    },
    /// Polar stereographic on WGS84
    PolarStereographic {
        hemisphere: Hemisphere,
        #[serde(default)]
        central_meridian: f64,
        true_scale_latitude: f64,
    },
}

fn default_sphere_radius() -> f64 {
    projection::sinusoidal::MODIS_SPHERE_RADIUS
}

impl ProjectionConfig {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Geographic => "geographic",
            Self::Sinusoidal { .. } => "sinusoidal",
            Self::PolarStereographic { .. } => "polar_stereographic",
        }
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self, Self::Geographic)
    }

    /// Reject parameters that would yield non-finite coordinates.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| LocatorMapError::InvalidProjection {
            projection: self.name(),
            message,
        };
        match *self {
            Self::Geographic => Ok(()),
            Self::Sinusoidal {
                central_meridian,
                radius,
            } => {
                if !central_meridian.is_finite() {
                    return Err(invalid(format!(
                        "central meridian {} is not finite",
                        central_meridian
                    )));
                }
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(invalid(format!("radius {} must be positive", radius)));
                }
                Ok(())
            }
            Self::PolarStereographic {
                central_meridian,
                true_scale_latitude,
                ..
            } => {
                if !central_meridian.is_finite() {
                    return Err(invalid(format!(
                        "central meridian {} is not finite",
                        central_meridian
                    )));
                }
                // Sign is ignored; the hemisphere picks the pole.
                let lat_ts = true_scale_latitude.abs();
                if lat_ts.is_nan() || lat_ts == 0.0 || lat_ts > 90.0 {
                    return Err(invalid(format!(
                        "true scale latitude {} must be in (0, 90]",
                        true_scale_latitude
                    )));
                }
                Ok(())
            }
        }
    }

    /// Instantiate the shared transform.
    pub fn build(&self) -> Arc<dyn ProjectionTransform> {
        match *self {
            Self::Geographic => Arc::new(Geographic::new()),
            Self::Sinusoidal {
                central_meridian,
                radius,
            } => Arc::new(Sinusoidal::new(central_meridian, radius)),
            Self::PolarStereographic {
                hemisphere,
                central_meridian,
                true_scale_latitude,
            } => Arc::new(PolarStereographic::new(
                hemisphere,
                central_meridian,
                true_scale_latitude,
            )),
        }
    }
}

/// One locator map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorMapConfig {
    pub name: String,
    /// Raster width in pixels
    pub width: i64,
    /// Raster height in pixels
    pub height: i64,
    pub extent: Extent,
    #[serde(default = "default_projection")]
    pub projection: ProjectionConfig,
    /// Asset identifier of the base map raster
    pub base_image: String,
    /// Asset identifier of the optional boundary overlay
    #[serde(default)]
    pub boundary_image: Option<String>,
    /// Clamp click-driven recentring to the extent
    #[serde(default)]
    pub bumper: bool,
    /// The geographic extent runs east across ±180°
    #[serde(default)]
    pub crosses_antimeridian: bool,
}

fn default_projection() -> ProjectionConfig {
    ProjectionConfig::Geographic
}

impl LocatorMapConfig {
    /// Parse a single record from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a single record from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading locator map config");
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    /// Load a YAML list of records, validating each.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let configs: Vec<Self> = serde_yaml::from_str(&fs::read_to_string(path)?)?;
        for config in &configs {
            config.validate()?;
        }
        debug!(path = %path.display(), count = configs.len(), "Loaded locator map configs");
        Ok(configs)
    }

    /// Fail fast on records that cannot be mapped.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(LocatorMapError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.base_image.trim().is_empty() {
            return Err(LocatorMapError::MissingAsset("base_image"));
        }
        if matches!(&self.boundary_image, Some(asset) if asset.trim().is_empty()) {
            return Err(LocatorMapError::MissingAsset("boundary_image"));
        }
        self.projection.validate()?;
        if !self.extent.is_finite() {
            return Err(LocatorMapError::invalid_extent("extent bounds must be finite"));
        }
        if self.extent.vertical_span() <= 0.0 {
            return Err(LocatorMapError::invalid_extent(format!(
                "top {} must be above bottom {}",
                self.extent.top, self.extent.bottom
            )));
        }
        if self.crosses_antimeridian {
            if !self.projection.is_geographic() {
                return Err(LocatorMapError::invalid_extent(
                    "only geographic extents can cross the antimeridian",
                ));
            }
            if self.extent.left <= self.extent.right {
                return Err(LocatorMapError::invalid_extent(format!(
                    "antimeridian extent needs left > right, got {} .. {}",
                    self.extent.left, self.extent.right
                )));
            }
        } else if self.extent.horizontal_span(false) <= 0.0 {
            return Err(LocatorMapError::invalid_extent(format!(
                "right {} must be east of left {}",
                self.extent.right, self.extent.left
            )));
        }
        Ok(())
    }

    /// Asset identifiers in load order: base first, then the overlay.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base_image.as_str()).chain(self.boundary_image.as_deref())
    }
}

// ============================================================================
// Built-in records
// ============================================================================

/// Locator maps shipped with the browser.
pub mod presets {
    use super::*;

    /// Whole-world geographic map.
    pub fn world() -> LocatorMapConfig {
        LocatorMapConfig {
            name: "world".to_string(),
            width: 1007,
            height: 503,
            extent: Extent::new(-180.0, 180.0, 90.0, -90.0),
            projection: ProjectionConfig::Geographic,
            base_image: "world.png".to_string(),
            boundary_image: Some("world_boundaries.png".to_string()),
            bumper: false,
            crosses_antimeridian: false,
        }
    }

    /// Conterminous North America with panning held to the imagery.
    pub fn north_america() -> LocatorMapConfig {
        LocatorMapConfig {
            name: "north_america".to_string(),
            width: 673,
            height: 410,
            extent: Extent::new(-128.04, -60.74, 55.0, 14.0),
            projection: ProjectionConfig::Geographic,
            base_image: "north_america.png".to_string(),
            boundary_image: Some("north_america_boundaries.png".to_string()),
            bumper: true,
            crosses_antimeridian: false,
        }
    }

    /// Western Pacific to Hawaii, across the date line.
    pub fn pacific() -> LocatorMapConfig {
        LocatorMapConfig {
            name: "pacific".to_string(),
            width: 600,
            height: 600,
            extent: Extent::new(150.0, -150.0, 10.0, -50.0),
            projection: ProjectionConfig::Geographic,
            base_image: "pacific.png".to_string(),
            boundary_image: None,
            bumper: true,
            crosses_antimeridian: true,
        }
    }

    /// Antarctica in south polar stereographic, true scale at 71°S.
    pub fn antarctica() -> LocatorMapConfig {
        LocatorMapConfig {
            name: "antarctica".to_string(),
            width: 600,
            height: 600,
            extent: Extent::new(-3_000_000.0, 3_000_000.0, 3_000_000.0, -3_000_000.0),
            projection: ProjectionConfig::PolarStereographic {
                hemisphere: Hemisphere::South,
                central_meridian: 0.0,
                true_scale_latitude: 71.0,
            },
            base_image: "antarctica.png".to_string(),
            boundary_image: Some("antarctica_coast.png".to_string()),
            bumper: true,
            crosses_antimeridian: false,
        }
    }

    /// Global sinusoidal grid used by MODIS tiles.
    pub fn modis() -> LocatorMapConfig {
        LocatorMapConfig {
            name: "modis".to_string(),
            width: 720,
            height: 360,
            extent: Extent::new(-20_015_109.354, 20_015_109.354, 10_007_554.677, -10_007_554.677),
            projection: ProjectionConfig::Sinusoidal {
                central_meridian: 0.0,
                radius: projection::sinusoidal::MODIS_SPHERE_RADIUS,
            },
            base_image: "modis_sinusoidal.png".to_string(),
            boundary_image: None,
            bumper: false,
            crosses_antimeridian: false,
        }
    }

    /// Every built-in record.
    pub fn all() -> Vec<LocatorMapConfig> {
        vec![world(), north_america(), pacific(), antarctica(), modis()]
    }

    /// Look up a built-in record by name.
    pub fn by_name(name: &str) -> Option<LocatorMapConfig> {
        all().into_iter().find(|config| config.name == name)
    }
}
