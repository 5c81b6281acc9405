//! Tile planning: split a sector into a grid and generate one URL per cell.

use serde::Serialize;
use tracing::warn;
use wcs_common::{Sector, WcsError, WcsResult};
use wcs_protocol::ElevationRequestConfig;

/// One planned GetCoverage request.
#[derive(Debug, Clone, Serialize)]
pub struct TileUrl {
    pub sector: Sector,
    pub url: String,
}

/// Plan `rows x cols` tile URLs over the part of `sector` the coverage covers.
///
/// Tiles are ordered row-major from the south-west corner.
pub fn plan_tile_urls(
    config: &ElevationRequestConfig,
    sector: &Sector,
    rows: u32,
    cols: u32,
) -> WcsResult<Vec<TileUrl>> {
    let area = config.sector().intersection(sector).ok_or_else(|| {
        WcsError::Argument(format!(
            "sector {} lies outside coverage '{}' ({})",
            sector,
            config.coverage_id(),
            config.sector()
        ))
    })?;

    let cells = area.subdivide(rows, cols)?;
    if let Some(first) = cells.first() {
        let tile_resolution = config.tile(*first).samples_per_radian();
        if tile_resolution > config.resolution() {
            warn!(
                coverage = %config.coverage_id(),
                tile_resolution = tile_resolution,
                native_resolution = config.resolution(),
                "Tiles are finer than the coverage's native resolution"
            );
        }
    }

    cells
        .into_iter()
        .map(|cell| -> WcsResult<TileUrl> {
            Ok(TileUrl {
                url: config.url_for_tile(&cell)?,
                sector: cell,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::{coverages, wcs201};
    use wcs_protocol::{CoverageCatalog, CoverageResolver};

    fn elevation_config() -> ElevationRequestConfig {
        let catalog = CoverageCatalog::new(
            serde_json::from_str(wcs201::CAPABILITIES).unwrap(),
            serde_json::from_str(wcs201::DESCRIBE_COVERAGE).unwrap(),
        )
        .unwrap();
        CoverageResolver::new(&catalog)
            .build_elevation_config(coverages::ASTER)
            .unwrap()
    }

    #[test]
    fn test_plan_grid() {
        let config = elevation_config();
        let sector = Sector::new(-5.0, 5.0, -10.0, 10.0).unwrap();
        let tiles = plan_tile_urls(&config, &sector, 1, 2).unwrap();

        assert_eq!(tiles.len(), 2);
        assert!(tiles[0].url.ends_with("SUBSET=Lat(-5,5)&SUBSET=Long(-10,0)"));
        assert!(tiles[1].url.ends_with("SUBSET=Lat(-5,5)&SUBSET=Long(0,10)"));
    }

    #[test]
    fn test_plan_clips_to_coverage() {
        let config = elevation_config();
        let beyond = Sector::new(80.0, 90.0, 170.0, 180.0).unwrap();
        let tiles = plan_tile_urls(&config, &beyond, 1, 1).unwrap();

        assert_eq!(tiles[0].sector, beyond);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let config = elevation_config();
        let result = plan_tile_urls(&config, &Sector::FULL_SPHERE, 0, 1);
        assert!(matches!(result, Err(WcsError::Argument(_))));
    }
}
