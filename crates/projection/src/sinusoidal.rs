//! Sinusoidal (Sanson-Flamsteed) projection on a sphere.
//!
//! Used by MODIS land products. Equal-area, with meridians drawn as sine
//! curves about the central meridian.
//!
//! forward: x = R·(λ - λ₀)·cos(φ), y = R·φ
//! inverse: φ = y/R, λ = λ₀ + x/(R·cos(φ))
//!
//! Projected units are whole meters.

use serde::{Deserialize, Serialize};

use scene_common::{GeographicCoordinate, ProjectedCoordinate};

use crate::transform::{to_unit, ProjectionTransform};

/// Sphere radius used by the MODIS sinusoidal grid (meters).
pub const MODIS_SPHERE_RADIUS: f64 = 6_371_007.181;

/// Sinusoidal projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sinusoidal {
    /// Central meridian in degrees
    pub central_meridian: f64,
    /// Sphere radius in meters
    pub radius: f64,
}

impl Sinusoidal {
    pub fn new(central_meridian: f64, radius: f64) -> Self {
        Self {
            central_meridian,
            radius,
        }
    }

    /// MODIS sinusoidal grid: central meridian 0°, authalic sphere.
    pub fn modis() -> Self {
        Self::new(0.0, MODIS_SPHERE_RADIUS)
    }
}

impl Default for Sinusoidal {
    fn default() -> Self {
        Self::modis()
    }
}

impl ProjectionTransform for Sinusoidal {
    fn name(&self) -> &'static str {
        "sinusoidal"
    }

    fn to_geographic(&self, coord: ProjectedCoordinate) -> GeographicCoordinate {
        let lat = coord.y as f64 / self.radius;
        let cos_lat = lat.cos();
        if cos_lat.abs() < 1e-12 {
            // At the poles, longitude is undefined
            return GeographicCoordinate::new(lat.to_degrees(), self.central_meridian);
        }
        let dlon = coord.x as f64 / (self.radius * cos_lat);
        GeographicCoordinate::new(
            lat.to_degrees(),
            self.central_meridian + dlon.to_degrees(),
        )
    }

    fn to_projected(&self, coord: GeographicCoordinate) -> ProjectedCoordinate {
        let lat = coord.latitude.to_radians();
        let dlon = (coord.longitude - self.central_meridian).to_radians();
        ProjectedCoordinate::new(
            to_unit(self.radius * dlon * lat.cos()),
            to_unit(self.radius * lat),
        )
    }
}
