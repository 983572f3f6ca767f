//! Tests for shared coordinate and box types.

use scene_common::{GeographicBox, GeographicCoordinate, GridCell, ProjectedCoordinate};
use test_utils::{assert_approx_eq, fixtures};

// ============================================================================
// GeographicBox tests
// ============================================================================

#[test]
fn test_box_from_edges() {
    let (west, south, east, north) = fixtures::extent::GLOBAL;
    let bbox = GeographicBox::from_edges(west, north, east, south);
    assert_eq!(bbox.width(), 360.0);
    assert_eq!(bbox.height(), 180.0);
    assert_eq!(bbox.center(), GeographicCoordinate::new(0.0, 0.0));
}

#[test]
fn test_box_contains_edges() {
    let (west, south, east, north) = fixtures::extent::NORTH_AMERICA;
    let bbox = GeographicBox::from_edges(west, north, east, south);
    assert!(bbox.contains(&GeographicCoordinate::new(north, west)));
    assert!(bbox.contains(&GeographicCoordinate::new(south, east)));
    assert!(!bbox.contains(&GeographicCoordinate::new(north + 0.01, west)));
    assert!(!bbox.contains(&GeographicCoordinate::new(south, east + 0.01)));
}

#[test]
fn test_box_clamp_inside_is_identity() {
    let bbox = GeographicBox::from_edges(-10.0, 10.0, 10.0, -10.0);
    let coord = GeographicCoordinate::new(3.5, -2.25);
    assert_eq!(bbox.clamp(coord), coord);
}

#[test]
fn test_box_serde_roundtrip_shape() {
    let bbox = GeographicBox::from_edges(-1.0, 2.0, 3.0, -4.0);
    let json = serde_json::to_value(bbox).unwrap();
    assert_approx_eq!(json["upper_left"]["latitude"].as_f64().unwrap(), 2.0, 1e-12);
    assert_approx_eq!(json["lower_right"]["longitude"].as_f64().unwrap(), 3.0, 1e-12);
}

// ============================================================================
// Value type tests
// ============================================================================

#[test]
fn test_projected_coordinate_hashable() {
    use std::collections::HashSet;
    let set: HashSet<_> = [
        ProjectedCoordinate::new(1, 2),
        ProjectedCoordinate::new(1, 2),
        ProjectedCoordinate::new(2, 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_grid_cell_serde_field_names() {
    let json = serde_json::to_string(&GridCell::new(44, 34)).unwrap();
    assert_eq!(json, r#"{"path":44,"row":34}"#);
}

#[test]
fn test_geographic_display() {
    let coord = GeographicCoordinate::new(-33.5, 151.25);
    assert_eq!(coord.to_string(), "33.5000°S 151.2500°E");
}
