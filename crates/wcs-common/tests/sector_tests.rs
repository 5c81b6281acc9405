//! Comprehensive tests for Sector operations.

use test_utils::{assert_approx_eq, fixtures};
use wcs_common::sector::MAX_SUBDIVISION_CELLS;
use wcs_common::{Sector, WcsError};

fn sector(bounds: (f64, f64, f64, f64)) -> Sector {
    Sector::new(bounds.0, bounds.1, bounds.2, bounds.3).unwrap()
}

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_sector_new() {
    let s = sector(fixtures::sector::GLOBAL);
    assert_eq!(s.min_latitude(), -90.0);
    assert_eq!(s.max_latitude(), 90.0);
    assert_eq!(s.min_longitude(), -180.0);
    assert_eq!(s.max_longitude(), 180.0);
}

#[test]
fn test_sector_degenerate_allowed() {
    let s = Sector::new(10.0, 10.0, 20.0, 20.0).unwrap();
    assert_eq!(s.delta_latitude(), 0.0);
    assert_eq!(s.delta_longitude(), 0.0);
}

#[test]
fn test_sector_nan_rejected() {
    let result = Sector::new(f64::NAN, 10.0, 0.0, 1.0);
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_sector_infinite_rejected() {
    let result = Sector::new(-90.0, 90.0, f64::NEG_INFINITY, 180.0);
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));

    let result = Sector::new(-90.0, f64::INFINITY, -180.0, 180.0);
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_sector_negative_zero_normalized() {
    let s = Sector::new(-0.0, 1.0, -0.0, 1.0).unwrap();
    assert!(s.min_latitude().is_sign_positive());
    assert!(s.min_longitude().is_sign_positive());
    assert_eq!(s.to_string(), "0,1,0,1");
}

// ============================================================================
// Corner string tests
// ============================================================================

#[test]
fn test_corners_are_lon_lat() {
    let s = Sector::from_lon_lat_corners("-130 20", "-60 55").unwrap();
    assert_eq!(s, sector(fixtures::sector::CONUS));
}

#[test]
fn test_corners_extra_whitespace() {
    let s = Sector::from_lon_lat_corners("  -180\t-90 ", "180   90").unwrap();
    assert_eq!(s, Sector::FULL_SPHERE);
}

#[test]
fn test_corners_wrong_arity() {
    let result = Sector::from_lon_lat_corners("-180 -90 0", "180 90");
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_corners_not_numeric() {
    let result = Sector::from_lon_lat_corners("west south", "180 90");
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_corners_infinite_rejected() {
    let result = Sector::from_lon_lat_corners("-inf -90", "inf 90");
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));

    let result = Sector::from_lon_lat_corners("-180 -infinity", "180 90");
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_corners_inverted() {
    let result = Sector::from_lon_lat_corners("180 90", "-180 -90");
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

// ============================================================================
// Parsing tests
// ============================================================================

#[test]
fn test_parse_sector_string() {
    let s: Sector = "-5,5,-10,10".parse().unwrap();
    assert_eq!(s, sector(fixtures::sector::EQUATORIAL_TILE));
}

#[test]
fn test_parse_sector_display_round_trip() {
    let s = sector(fixtures::sector::CONUS);
    let parsed: Sector = s.to_string().parse().unwrap();
    assert_eq!(parsed, s);
}

#[test]
fn test_parse_sector_too_few_parts() {
    let result: Result<Sector, _> = "0,1,2".parse();
    assert!(matches!(result, Err(WcsError::InvalidSector(_))));
}

#[test]
fn test_deserialize_rejects_inverted() {
    let json = r#"{"minLatitude": 10, "maxLatitude": 0, "minLongitude": 0, "maxLongitude": 1}"#;
    assert!(serde_json::from_str::<Sector>(json).is_err());
}

#[test]
fn test_deserialize_valid() {
    let json = r#"{"minLatitude": -5, "maxLatitude": 5, "minLongitude": -10, "maxLongitude": 10}"#;
    let s: Sector = serde_json::from_str(json).unwrap();
    assert_eq!(s, sector(fixtures::sector::EQUATORIAL_TILE));
}

// ============================================================================
// Geometry tests
// ============================================================================

#[test]
fn test_centroid() {
    let (lat, lon) = sector(fixtures::sector::CONUS).centroid();
    assert_approx_eq!(lat, 37.5, 1e-9);
    assert_approx_eq!(lon, -95.0, 1e-9);
}

#[test]
fn test_contains_edges() {
    let s = sector(fixtures::sector::EQUATORIAL_TILE);
    assert!(s.contains(0.0, 0.0));
    assert!(s.contains(5.0, 10.0));
    assert!(!s.contains(5.1, 0.0));
    assert!(!s.contains(0.0, -10.1));
}

#[test]
fn test_touching_sectors_do_not_intersect() {
    let a = Sector::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let b = Sector::new(10.0, 20.0, 0.0, 10.0).unwrap();
    assert!(!a.intersects(&b));
    assert!(a.intersection(&b).is_none());
}

#[test]
fn test_subdivide_covers_parent() {
    let parent = sector(fixtures::sector::CONUS);
    let cells = parent.subdivide(2, 3).unwrap();
    assert_eq!(cells.len(), 6);

    // South-west first, north-east last
    assert_eq!(cells[0].min_latitude(), parent.min_latitude());
    assert_eq!(cells[0].min_longitude(), parent.min_longitude());
    assert_eq!(cells[5].max_latitude(), parent.max_latitude());
    assert_eq!(cells[5].max_longitude(), parent.max_longitude());

    let area: f64 = cells
        .iter()
        .map(|c| c.delta_latitude() * c.delta_longitude())
        .sum();
    assert_approx_eq!(area, parent.delta_latitude() * parent.delta_longitude(), 1e-6);
}

#[test]
fn test_subdivide_zero_is_argument_error() {
    let result = Sector::FULL_SPHERE.subdivide(0, 4);
    assert!(matches!(result, Err(WcsError::Argument(_))));
}

#[test]
fn test_subdivide_overflowing_grid_rejected() {
    let result = Sector::FULL_SPHERE.subdivide(65536, 65536);
    assert!(matches!(result, Err(WcsError::Argument(_))));
}

#[test]
fn test_subdivide_cell_limit() {
    let result = Sector::FULL_SPHERE.subdivide(MAX_SUBDIVISION_CELLS + 1, 1);
    assert!(matches!(result, Err(WcsError::Argument(_))));

    let cells = Sector::FULL_SPHERE.subdivide(1000, 1000).unwrap();
    assert_eq!(cells.len(), MAX_SUBDIVISION_CELLS as usize);
}
