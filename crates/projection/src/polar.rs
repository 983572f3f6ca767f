//! Polar Stereographic projection on the WGS84 ellipsoid.
//!
//! Used for the Antarctic (EPSG:3031) and Arctic (EPSG:3413) locator maps.
//! The projection plane touches the ellipsoid at the latitude of true scale
//! and the pole projects to the origin.
//!
//! Projected units are whole meters.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use scene_common::{GeographicCoordinate, ProjectedCoordinate};

use crate::transform::{to_unit, ProjectionTransform};

/// WGS84 semi-major axis (meters)
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// Which pole the projection is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    North,
    South,
}

/// Polar Stereographic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarStereographic {
    /// Pole of projection
    pub hemisphere: Hemisphere,
    /// Meridian pointing "down" from the pole (degrees)
    pub central_meridian: f64,
    /// Latitude of true scale (degrees, positive magnitude)
    pub true_scale_latitude: f64,
    /// First eccentricity
    e: f64,
    /// a · m_c / t_c scale factor
    akm: f64,
}

impl PolarStereographic {
    /// Create a projection from the latitude of true scale.
    ///
    /// # Arguments
    /// * `hemisphere` - Pole of projection
    /// * `central_meridian` - Straight vertical meridian (degrees)
    /// * `true_scale_latitude` - Latitude of true scale (degrees, sign ignored)
    pub fn new(hemisphere: Hemisphere, central_meridian: f64, true_scale_latitude: f64) -> Self {
        let e2 = 2.0 * WGS84_F - WGS84_F * WGS84_F;
        let e = e2.sqrt();
        let lat_ts = true_scale_latitude.abs().to_radians();

        let akm = if (lat_ts - FRAC_PI_2).abs() < 1e-10 {
            // True scale at the pole: k0 = 1
            let ep = (1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e);
            WGS84_A * 2.0 / ep.sqrt()
        } else {
            let sin_ts = lat_ts.sin();
            let m_c = lat_ts.cos() / (1.0 - e2 * sin_ts * sin_ts).sqrt();
            WGS84_A * m_c / tsfn(lat_ts, e)
        };

        Self {
            hemisphere,
            central_meridian,
            true_scale_latitude: true_scale_latitude.abs(),
            e,
            akm,
        }
    }

    /// EPSG:3031 Antarctic Polar Stereographic.
    pub fn antarctic() -> Self {
        Self::new(Hemisphere::South, 0.0, 71.0)
    }

    /// EPSG:3413 NSIDC Sea Ice Polar Stereographic North.
    pub fn arctic() -> Self {
        Self::new(Hemisphere::North, -45.0, 70.0)
    }

    fn sign(&self) -> f64 {
        match self.hemisphere {
            Hemisphere::North => 1.0,
            Hemisphere::South => -1.0,
        }
    }
}

/// Isometric-latitude helper t(φ).
fn tsfn(phi: f64, e: f64) -> f64 {
    let sin_phi = phi.sin();
    let con = e * sin_phi;
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - con) / (1.0 + con)).powf(e / 2.0)
}

/// Invert t(φ) by fixed-point iteration.
fn phi_from_ts(ts: f64, e: f64) -> f64 {
    let half_e = e / 2.0;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..15 {
        let con = e * phi.sin();
        let next = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan();
        if (next - phi).abs() < 1e-12 {
            return next;
        }
        phi = next;
    }
    phi
}

impl ProjectionTransform for PolarStereographic {
    fn name(&self) -> &'static str {
        match self.hemisphere {
            Hemisphere::North => "polar_stereographic_north",
            Hemisphere::South => "polar_stereographic_south",
        }
    }

    fn to_geographic(&self, coord: ProjectedCoordinate) -> GeographicCoordinate {
        let sign = self.sign();
        // Fold the southern case onto the northern formulas
        let x = sign * coord.x as f64;
        let y = sign * coord.y as f64;

        let rho = x.hypot(y);
        let lat = phi_from_ts(rho / self.akm, self.e);
        let lon = if rho == 0.0 {
            0.0
        } else {
            x.atan2(-y)
        };

        GeographicCoordinate::new(
            sign * lat.to_degrees(),
            self.central_meridian + sign * lon.to_degrees(),
        )
    }

    fn to_projected(&self, coord: GeographicCoordinate) -> ProjectedCoordinate {
        let sign = self.sign();
        let lat = sign * coord.latitude.to_radians();
        let dlon = sign * (coord.longitude - self.central_meridian).to_radians();

        let rho = self.akm * tsfn(lat, self.e);
        let x = rho * dlon.sin();
        let y = -rho * dlon.cos();

        ProjectedCoordinate::new(to_unit(sign * x), to_unit(sign * y))
    }
}
