//! Geographic bounds of a projected viewport.
//!
//! A rectangle in projected space is generally not a rectangle in
//! latitude/longitude, so the enclosing box is derived from all four corners
//! rather than the two that define the viewport.

use tracing::warn;

use scene_common::{GeographicBox, GeographicCoordinate, ProjectedCoordinate};

use crate::transform::ProjectionTransform;

/// Compute the smallest geographic box enclosing a projected viewport.
///
/// `upper_left` and `lower_right` are opposite viewport corners in the
/// projection's native units. The result takes the minimum longitude and
/// maximum latitude over all four corners for its upper-left, and the
/// maximum longitude and minimum latitude for its lower-right.
///
/// Viewports straddling ±180° produce an inverted or oversized box. This is
/// logged, not corrected.
pub fn geographic_bounds(
    upper_left: ProjectedCoordinate,
    lower_right: ProjectedCoordinate,
    projection: &dyn ProjectionTransform,
) -> GeographicBox {
    let corners = viewport_corners(upper_left, lower_right).map(|c| projection.to_geographic(c));

    if spans_antimeridian(&corners) {
        warn!(
            projection = projection.name(),
            ?upper_left,
            ?lower_right,
            "Viewport crosses the antimeridian; geographic bounds are approximate"
        );
    }

    let mut bbox = GeographicBox::new(corners[0], corners[0]);
    for corner in &corners[1..] {
        bbox.upper_left.longitude = bbox.upper_left.longitude.min(corner.longitude);
        bbox.upper_left.latitude = bbox.upper_left.latitude.max(corner.latitude);
        bbox.lower_right.longitude = bbox.lower_right.longitude.max(corner.longitude);
        bbox.lower_right.latitude = bbox.lower_right.latitude.min(corner.latitude);
    }
    bbox
}

/// Corners in ring order: upper-left, upper-right, lower-right, lower-left.
pub fn viewport_corners(
    upper_left: ProjectedCoordinate,
    lower_right: ProjectedCoordinate,
) -> [ProjectedCoordinate; 4] {
    [
        upper_left,
        ProjectedCoordinate::new(lower_right.x, upper_left.y),
        lower_right,
        ProjectedCoordinate::new(upper_left.x, lower_right.y),
    ]
}

/// Check whether adjacent corners of a ring jump across ±180° longitude.
///
/// A jump of more than 180° between neighbours means the short way round
/// passes through the antimeridian.
pub fn spans_antimeridian(ring: &[GeographicCoordinate]) -> bool {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .any(|(a, b)| (a.longitude - b.longitude).abs() > 180.0)
}
