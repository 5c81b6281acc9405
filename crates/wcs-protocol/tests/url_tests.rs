//! GetCoverage URL synthesis tests.

use std::sync::Arc;
use std::thread;

use test_utils::fixtures::{self, coverages, wcs100, wcs201};
use wcs_common::{Sector, Tile, WcsError};
use wcs_protocol::{
    Coverage, CoverageCatalog, CoverageResolver, DescribeCoverage, TileUrlBuilder,
    WcsCapabilities,
};

fn resolve(caps: &str, desc: &str) -> Arc<Coverage> {
    let caps: WcsCapabilities = serde_json::from_str(caps).unwrap();
    let desc: DescribeCoverage = serde_json::from_str(desc).unwrap();
    resolve_docs(caps, desc)
}

fn resolve_docs(caps: WcsCapabilities, desc: DescribeCoverage) -> Arc<Coverage> {
    let catalog = CoverageCatalog::new(caps, desc).unwrap();
    Arc::new(
        CoverageResolver::new(&catalog)
            .resolve(coverages::ASTER)
            .unwrap(),
    )
}

fn equatorial_tile() -> Tile {
    let (min_lat, max_lat, min_lon, max_lon) = fixtures::sector::EQUATORIAL_TILE;
    Tile::with_default_size(Sector::new(min_lat, max_lat, min_lon, max_lon).unwrap())
}

// ============================================================================
// WCS 1.0.0
// ============================================================================

#[test]
fn test_wcs100_full_url() {
    let builder = TileUrlBuilder::new(resolve(wcs100::CAPABILITIES, wcs100::DESCRIBE_COVERAGE));
    let url = builder.url_for_tile(&equatorial_tile(), "image/tiff").unwrap();

    assert_eq!(
        url,
        "https://elevation.example.org/wcs?SERVICE=WCS&REQUEST=GetCoverage&VERSION=1.0.0\
         &COVERAGE=aster_v2&CRS=EPSG:4326&WIDTH=256&HEIGHT=256&FORMAT=image/tiff\
         &BBOX=-10,-5,10,5"
    );
}

#[test]
fn test_wcs100_bbox_is_lon_lat() {
    let builder = TileUrlBuilder::new(resolve(wcs100::CAPABILITIES, wcs100::DESCRIBE_COVERAGE));
    let tile = Tile::new(Sector::new(20.0, 55.5, -130.25, -60.0).unwrap(), 64, 32);
    let url = builder.url_for_tile_default_format(&tile).unwrap();

    assert!(url.ends_with("&BBOX=-130.25,20,-60,55.5"));
    assert!(url.contains("&WIDTH=64&HEIGHT=32&FORMAT=GeoTIFF&"));
}

// ============================================================================
// WCS 2.0.x
// ============================================================================

#[test]
fn test_wcs201_full_url() {
    let builder = TileUrlBuilder::new(resolve(wcs201::CAPABILITIES, wcs201::DESCRIBE_COVERAGE));
    let url = builder.url_for_tile(&equatorial_tile(), "image/tiff").unwrap();

    assert_eq!(
        url,
        "https://elevation.example.org/ows?map=dem&SERVICE=WCS&REQUEST=GetCoverage\
         &VERSION=2.0.1&COVERAGEID=aster_v2&FORMAT=image/tiff\
         &SCALESIZE=i(256),j(256)&OVERVIEWPOLICY=NEAREST\
         &SUBSET=Lat(-5,5)&SUBSET=Long(-10,10)"
    );
}

#[test]
fn test_wcs200_version_parameter() {
    let mut caps: WcsCapabilities = serde_json::from_str(wcs201::CAPABILITIES).unwrap();
    caps.version = "2.0.0".to_string();
    let desc: DescribeCoverage = serde_json::from_str(wcs201::DESCRIBE_COVERAGE).unwrap();

    let builder = TileUrlBuilder::new(resolve_docs(caps, desc));
    let url = builder.url_for_tile_default_format(&equatorial_tile()).unwrap();

    assert!(url.contains("&VERSION=2.0.0&COVERAGEID=aster_v2&FORMAT=image/tiff&"));
}

#[test]
fn test_wcs201_subset_labels_follow_envelope() {
    let caps: WcsCapabilities = serde_json::from_str(wcs201::CAPABILITIES).unwrap();
    let mut desc: DescribeCoverage = serde_json::from_str(wcs201::DESCRIBE_COVERAGE).unwrap();
    let envelope = &mut desc.coverages[0].bounded_by.as_mut().unwrap().envelope;
    envelope.axis_labels = vec!["lon".to_string(), "latitude".to_string()];
    envelope.lower = vec![-180.0, -90.0];
    envelope.upper = vec![180.0, 90.0];

    let builder = TileUrlBuilder::new(resolve_docs(caps, desc));
    let url = builder.url_for_tile(&equatorial_tile(), "image/tiff").unwrap();

    assert!(url.ends_with("&SUBSET=latitude(-5,5)&SUBSET=lon(-10,10)"));
}

// ============================================================================
// Arguments and encoding
// ============================================================================

#[test]
fn test_missing_format_rejected() {
    let builder = TileUrlBuilder::new(resolve(wcs201::CAPABILITIES, wcs201::DESCRIBE_COVERAGE));

    for format in ["", "   "] {
        let result = builder.url_for_tile(&equatorial_tile(), format);
        assert!(matches!(result, Err(WcsError::Argument(_))));
    }
}

#[test]
fn test_zero_sized_tile_rejected() {
    let builder = TileUrlBuilder::new(resolve(wcs100::CAPABILITIES, wcs100::DESCRIBE_COVERAGE));
    let tile = Tile::new(Sector::FULL_SPHERE, 0, 256);

    let result = builder.url_for_tile(&tile, "image/tiff");
    assert!(result.unwrap_err().is_argument_error());
}

#[test]
fn test_single_separator_after_base() {
    for (caps, desc) in [
        (wcs100::CAPABILITIES, wcs100::DESCRIBE_COVERAGE),
        (wcs201::CAPABILITIES, wcs201::DESCRIBE_COVERAGE),
    ] {
        let builder = TileUrlBuilder::new(resolve(caps, desc));
        let url = builder.url_for_tile_default_format(&equatorial_tile()).unwrap();

        assert_eq!(url.matches('?').count(), 1, "{}", url);
        assert!(!url.contains("&&"), "{}", url);
        assert!(!url.contains("?&"), "{}", url);
    }
}

#[test]
fn test_format_with_space_is_encoded() {
    let builder = TileUrlBuilder::new(resolve(wcs100::CAPABILITIES, wcs100::DESCRIBE_COVERAGE));
    let url = builder
        .url_for_tile(&equatorial_tile(), "image/tiff; subtype=geotiff")
        .unwrap();

    assert!(url.contains("&FORMAT=image/tiff;%20subtype=geotiff&"));
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_builder_shared_across_threads() {
    let builder = TileUrlBuilder::new(resolve(wcs201::CAPABILITIES, wcs201::DESCRIBE_COVERAGE));
    let tiles = Sector::FULL_SPHERE.subdivide(4, 8).unwrap();
    let expected: Vec<String> = tiles
        .iter()
        .map(|s| builder.url_for_tile_default_format(&Tile::with_default_size(*s)).unwrap())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let builder = builder.clone();
                let tiles = &tiles;
                scope.spawn(move || {
                    tiles
                        .iter()
                        .map(|s| {
                            builder
                                .url_for_tile_default_format(&Tile::with_default_size(*s))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_elevation_config_url_matches_builder() {
    let catalog = CoverageCatalog::new(
        serde_json::from_str(wcs100::CAPABILITIES).unwrap(),
        serde_json::from_str(wcs100::DESCRIBE_COVERAGE).unwrap(),
    )
    .unwrap();
    let config = CoverageResolver::new(&catalog)
        .build_elevation_config(coverages::ASTER)
        .unwrap();

    let tile = equatorial_tile();
    let builder = TileUrlBuilder::new(Arc::clone(config.coverage()));

    assert_eq!(
        config.url_for_tile(&tile.sector).unwrap(),
        builder.url_for_tile_default_format(&tile).unwrap()
    );
}
