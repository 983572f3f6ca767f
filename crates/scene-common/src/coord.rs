//! Coordinate value types.
//!
//! Three coordinate spaces meet in the browser:
//! - geographic latitude/longitude in degrees
//! - integer projected coordinates in a projection's native units
//! - orbit-referenced path/row grid cells

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GeoError, GeoResult};

/// A latitude/longitude pair in degrees.
///
/// Longitude is conventionally in `-180..=180`, but values past the
/// antimeridian are kept as given. Transformations never wrap them silently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting latitudes outside `-90..=90`.
    pub fn checked(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Copy of this coordinate with longitude wrapped into `[-180, 180)`.
    pub fn wrapped(&self) -> Self {
        Self::new(self.latitude, wrap_longitude(self.longitude))
    }
}

impl fmt::Display for GeographicCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Wrap a longitude into `[-180, 180)`.
pub fn wrap_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// A point in a projection's native integer units.
///
/// Geographic coordinates use degrees scaled by 100000 so every projection
/// shares one integer domain. Metric projections use whole meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProjectedCoordinate {
    pub x: i64,
    pub y: i64,
}

impl ProjectedCoordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A cell in an orbit-referenced path/row grid.
///
/// Valid ranges and wraparound belong to the navigation model in use,
/// so a cell by itself may hold any integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub path: i32,
    pub row: i32,
}

impl GridCell {
    pub fn new(path: i32, row: i32) -> Self {
        Self { path, row }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}/{:03}", self.path, self.row)
    }
}

impl FromStr for GridCell {
    type Err = GeoError;

    /// Parse `"PATH/ROW"`, e.g. `"044/034"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, row) = s
            .split_once('/')
            .ok_or_else(|| GeoError::InvalidGridCell(s.to_string()))?;
        let path = path
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidGridCell(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidGridCell(s.to_string()))?;
        Ok(Self { path, row })
    }
}
