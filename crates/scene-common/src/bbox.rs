//! Geographic bounding box.

use serde::{Deserialize, Serialize};

use crate::coord::GeographicCoordinate;

/// An axis-aligned latitude/longitude rectangle.
///
/// Stored as upper-left (max latitude, min longitude) and lower-right
/// (min latitude, max longitude) corners, matching screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicBox {
    pub upper_left: GeographicCoordinate,
    pub lower_right: GeographicCoordinate,
}

impl GeographicBox {
    pub fn new(upper_left: GeographicCoordinate, lower_right: GeographicCoordinate) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Create a box from edge values in degrees.
    pub fn from_edges(west: f64, north: f64, east: f64, south: f64) -> Self {
        Self {
            upper_left: GeographicCoordinate::new(north, west),
            lower_right: GeographicCoordinate::new(south, east),
        }
    }

    /// Smallest box enclosing all of `points`, or `None` if empty.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeographicCoordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = Self::new(first, first);
        for p in points {
            bbox.upper_left.longitude = bbox.upper_left.longitude.min(p.longitude);
            bbox.upper_left.latitude = bbox.upper_left.latitude.max(p.latitude);
            bbox.lower_right.longitude = bbox.lower_right.longitude.max(p.longitude);
            bbox.lower_right.latitude = bbox.lower_right.latitude.min(p.latitude);
        }
        Some(bbox)
    }

    pub fn west(&self) -> f64 {
        self.upper_left.longitude
    }

    pub fn east(&self) -> f64 {
        self.lower_right.longitude
    }

    pub fn north(&self) -> f64 {
        self.upper_left.latitude
    }

    pub fn south(&self) -> f64 {
        self.lower_right.latitude
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east() - self.west()
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north() - self.south()
    }

    pub fn center(&self) -> GeographicCoordinate {
        GeographicCoordinate::new(
            (self.north() + self.south()) / 2.0,
            (self.west() + self.east()) / 2.0,
        )
    }

    /// Check if a coordinate falls inside this box (edges inclusive).
    pub fn contains(&self, coord: &GeographicCoordinate) -> bool {
        coord.longitude >= self.west()
            && coord.longitude <= self.east()
            && coord.latitude >= self.south()
            && coord.latitude <= self.north()
    }

    /// Clamp a coordinate onto this box.
    pub fn clamp(&self, coord: GeographicCoordinate) -> GeographicCoordinate {
        GeographicCoordinate::new(
            coord.latitude.clamp(self.south(), self.north()),
            coord.longitude.clamp(self.west(), self.east()),
        )
    }
}
