//! The projection transform contract.

use std::fmt::Debug;

use scene_common::{GeographicCoordinate, ProjectedCoordinate};

/// Bidirectional mapping between a projection's integer coordinates and
/// geographic coordinates.
///
/// Both directions are pure and total over their domains. Converting a
/// projected coordinate to geographic and back returns the input within
/// one unit of the integer representation.
///
/// Implementations are immutable and shared across threads, typically as
/// `Arc<dyn ProjectionTransform>` selected once per locator map.
pub trait ProjectionTransform: Send + Sync + Debug {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Convert projected coordinates to latitude/longitude.
    fn to_geographic(&self, coord: ProjectedCoordinate) -> GeographicCoordinate;

    /// Convert latitude/longitude to projected coordinates.
    fn to_projected(&self, coord: GeographicCoordinate) -> ProjectedCoordinate;
}

/// Round a continuous projected value onto the integer grid.
#[inline]
pub(crate) fn to_unit(value: f64) -> i64 {
    value.round() as i64
}
