//! Geographic (plate carrée) transform.
//!
//! Degrees are carried in the integer projected domain pre-multiplied by a
//! fixed scale, so callers treat geographic locator maps exactly like metric
//! ones.

use scene_common::{GeographicCoordinate, ProjectedCoordinate};

use crate::transform::{to_unit, ProjectionTransform};

/// Integer projected units per degree.
pub const GEOGRAPHIC_SCALE: f64 = 100_000.0;

/// Latitude/longitude scaled into integer units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geographic;

impl Geographic {
    pub fn new() -> Self {
        Self
    }

    /// Degrees to projected units, without rounding.
    #[inline]
    pub fn degrees_to_units(degrees: f64) -> f64 {
        degrees * GEOGRAPHIC_SCALE
    }

    /// Projected units to degrees.
    #[inline]
    pub fn units_to_degrees(units: f64) -> f64 {
        units / GEOGRAPHIC_SCALE
    }
}

impl ProjectionTransform for Geographic {
    fn name(&self) -> &'static str {
        "geographic"
    }

    fn to_geographic(&self, coord: ProjectedCoordinate) -> GeographicCoordinate {
        GeographicCoordinate::new(
            Self::units_to_degrees(coord.y as f64),
            Self::units_to_degrees(coord.x as f64),
        )
    }

    fn to_projected(&self, coord: GeographicCoordinate) -> ProjectedCoordinate {
        ProjectedCoordinate::new(
            to_unit(Self::degrees_to_units(coord.longitude)),
            to_unit(Self::degrees_to_units(coord.latitude)),
        )
    }
}
