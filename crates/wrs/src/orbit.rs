//! World Reference System orbit geometry.
//!
//! Both WRS generations place 248 rows around one orbit, with row 60 at the
//! descending (daytime, southbound) equator crossing and row 184 at the
//! ascending crossing. Paths are numbered westward from a fixed descending
//! node longitude and repeat once per coverage cycle.
//!
//! The ground track is computed on a sphere from the orbit inclination and
//! the westward drift of the track per orbit (360° × cycle days / paths).
//! Positions are scene centres.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use scene_common::{wrap_longitude, GeographicCoordinate};

/// Rows per orbit for both WRS generations.
pub const ROWS_PER_ORBIT: i32 = 248;

/// Row centred on the descending equator crossing.
pub const DESCENDING_NODE_ROW: i32 = 60;

/// Row centred on the ascending equator crossing.
pub const ASCENDING_NODE_ROW: i32 = DESCENDING_NODE_ROW + ROWS_PER_ORBIT / 2;

/// Reference system generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrsSystem {
    /// Landsat 1-3 (18-day cycle, 251 paths)
    Wrs1,
    /// Landsat 4-9 (16-day cycle, 233 paths)
    Wrs2,
}

/// Half-orbit a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// Southbound (daytime) half-orbit
    Descending,
    /// Northbound (night) half-orbit
    Ascending,
}

impl WrsSystem {
    /// Number of paths in one coverage cycle.
    pub fn path_count(&self) -> i32 {
        match self {
            WrsSystem::Wrs1 => 251,
            WrsSystem::Wrs2 => 233,
        }
    }

    /// Days in one coverage cycle.
    pub fn cycle_days(&self) -> f64 {
        match self {
            WrsSystem::Wrs1 => 18.0,
            WrsSystem::Wrs2 => 16.0,
        }
    }

    /// Orbit inclination in degrees.
    pub fn inclination(&self) -> f64 {
        match self {
            WrsSystem::Wrs1 => 99.09,
            WrsSystem::Wrs2 => 98.2,
        }
    }

    /// Longitude of path 1's descending equator crossing in degrees.
    pub fn path_one_node_longitude(&self) -> f64 {
        match self {
            WrsSystem::Wrs1 => -57.0,
            WrsSystem::Wrs2 => -64.6,
        }
    }

    /// Longitude spacing between adjacent paths at the equator (degrees).
    pub fn path_spacing(&self) -> f64 {
        360.0 / self.path_count() as f64
    }

    /// Westward drift of the ground track over one orbit (degrees).
    pub fn drift_per_orbit(&self) -> f64 {
        360.0 * self.cycle_days() / self.path_count() as f64
    }

    pub fn label(&self) -> &'static str {
        match self {
            WrsSystem::Wrs1 => "WRS-1",
            WrsSystem::Wrs2 => "WRS-2",
        }
    }

    /// Scene centre of a (possibly fractional) path/row.
    pub fn to_geographic(&self, path: f64, row: f64) -> GeographicCoordinate {
        let u = row_to_argument_of_latitude(row);
        let node_longitude = self.path_one_node_longitude() - (path - 1.0) * self.path_spacing();
        GeographicCoordinate::new(
            self.latitude_at(u),
            wrap_longitude(node_longitude + self.longitude_offset(u)),
        )
    }

    /// Fractional path/row of the scene centred nearest to `coord` on `pass`.
    ///
    /// Latitudes beyond the orbit's reach resolve to the polar apex row.
    /// The path is in `[1, path_count + 1)`.
    pub fn to_grid(&self, coord: GeographicCoordinate, pass: Pass) -> (f64, f64) {
        let ratio = (coord.latitude.to_radians().sin() / self.inclination().to_radians().sin())
            .clamp(-1.0, 1.0);
        let u = match pass {
            Pass::Descending => PI - ratio.asin(),
            Pass::Ascending => TAU + ratio.asin(),
        };
        let row = argument_of_latitude_to_row(u);

        let node_longitude = coord.longitude - self.longitude_offset(u);
        let from_path_one = (self.path_one_node_longitude() - node_longitude).rem_euclid(360.0);
        let path = 1.0 + from_path_one / self.path_spacing();
        (path, row)
    }

    fn latitude_at(&self, u: f64) -> f64 {
        (self.inclination().to_radians().sin() * u.sin())
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
    }

    /// Longitude of the track at `u` relative to its descending node.
    fn longitude_offset(&self, u: f64) -> f64 {
        let inertial = inertial_longitude(u, self.inclination().to_radians())
            - inertial_longitude(PI, self.inclination().to_radians());
        let elapsed_orbits = (u - PI) / TAU;
        inertial.to_degrees() - elapsed_orbits * self.drift_per_orbit()
    }
}

/// Orbit angle from the ascending node for a row, in radians.
fn row_to_argument_of_latitude(row: f64) -> f64 {
    PI + (row - DESCENDING_NODE_ROW as f64) * TAU / ROWS_PER_ORBIT as f64
}

fn argument_of_latitude_to_row(u: f64) -> f64 {
    DESCENDING_NODE_ROW as f64 + (u - PI) * ROWS_PER_ORBIT as f64 / TAU
}

/// Non-rotating longitude of the sub-satellite point, continuous in `u`.
///
/// `tan λ = cos i · tan u`, unwrapped around `-u` so it never jumps.
fn inertial_longitude(u: f64, inclination: f64) -> f64 {
    let raw = (inclination.cos() * u.sin()).atan2(u.cos());
    let mut correction = raw + u;
    correction = (correction + PI).rem_euclid(TAU) - PI;
    -u + correction
}
