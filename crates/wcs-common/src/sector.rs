//! Geographic sector type and operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{WcsError, WcsResult};

/// Upper bound on the number of cells `Sector::subdivide` produces.
pub const MAX_SUBDIVISION_CELLS: u32 = 1_000_000;

/// A rectangular geographic extent in degrees.
///
/// Construction checks finite bounds and `min <= max` on both axes; the fields are private so a
/// sector can't be modified once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SectorRepr", rename_all = "camelCase")]
pub struct Sector {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectorRepr {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl TryFrom<SectorRepr> for Sector {
    type Error = WcsError;

    fn try_from(repr: SectorRepr) -> WcsResult<Self> {
        Sector::new(
            repr.min_latitude,
            repr.max_latitude,
            repr.min_longitude,
            repr.max_longitude,
        )
    }
}

impl Sector {
    /// The whole globe.
    pub const FULL_SPHERE: Sector = Sector {
        min_latitude: -90.0,
        max_latitude: 90.0,
        min_longitude: -180.0,
        max_longitude: 180.0,
    };

    /// Create a sector from its latitude and longitude bounds.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> WcsResult<Self> {
        let values = [min_latitude, max_latitude, min_longitude, max_longitude];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(WcsError::InvalidSector(format!(
                "non-finite bound in ({}, {}, {}, {})",
                min_latitude, max_latitude, min_longitude, max_longitude
            )));
        }
        if min_latitude > max_latitude {
            return Err(WcsError::InvalidSector(format!(
                "min latitude {} exceeds max latitude {}",
                min_latitude, max_latitude
            )));
        }
        if min_longitude > max_longitude {
            return Err(WcsError::InvalidSector(format!(
                "min longitude {} exceeds max longitude {}",
                min_longitude, max_longitude
            )));
        }

        // Adding 0.0 turns -0.0 into 0.0 so bounds never print as "-0"
        Ok(Self {
            min_latitude: min_latitude + 0.0,
            max_latitude: max_latitude + 0.0,
            min_longitude: min_longitude + 0.0,
            max_longitude: max_longitude + 0.0,
        })
    }

    /// Build a sector from OWS corner strings ("lon lat", whitespace separated).
    ///
    /// This is the layout of a `WGS84BoundingBox` `LowerCorner`/`UpperCorner`.
    pub fn from_lon_lat_corners(lower: &str, upper: &str) -> WcsResult<Self> {
        let (min_lon, min_lat) = parse_corner(lower)?;
        let (max_lon, max_lat) = parse_corner(upper)?;
        Sector::new(min_lat, max_lat, min_lon, max_lon)
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// Latitude extent in degrees.
    pub fn delta_latitude(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// Longitude extent in degrees.
    pub fn delta_longitude(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// Center of the sector as (latitude, longitude).
    pub fn centroid(&self) -> (f64, f64) {
        (
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    /// Check if a location is contained within this sector (edges inclusive).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }

    /// Check if this sector overlaps another with a non-zero area.
    pub fn intersects(&self, other: &Sector) -> bool {
        self.min_latitude < other.max_latitude
            && self.max_latitude > other.min_latitude
            && self.min_longitude < other.max_longitude
            && self.max_longitude > other.min_longitude
    }

    /// Compute the intersection of two sectors.
    pub fn intersection(&self, other: &Sector) -> Option<Sector> {
        if !self.intersects(other) {
            return None;
        }

        Some(Sector {
            min_latitude: self.min_latitude.max(other.min_latitude),
            max_latitude: self.max_latitude.min(other.max_latitude),
            min_longitude: self.min_longitude.max(other.min_longitude),
            max_longitude: self.max_longitude.min(other.max_longitude),
        })
    }

    /// Split into a `rows` x `cols` grid of equal sectors.
    ///
    /// Ordered row-major starting at the south-west corner.
    pub fn subdivide(&self, rows: u32, cols: u32) -> WcsResult<Vec<Sector>> {
        if rows == 0 || cols == 0 {
            return Err(WcsError::Argument(format!(
                "cannot subdivide a sector into {}x{} cells",
                rows, cols
            )));
        }

        let cells = rows
            .checked_mul(cols)
            .filter(|&n| n <= MAX_SUBDIVISION_CELLS)
            .ok_or_else(|| {
                WcsError::Argument(format!(
                    "{}x{} cells exceeds the limit of {} per subdivision",
                    rows, cols, MAX_SUBDIVISION_CELLS
                ))
            })?;

        let lat_step = self.delta_latitude() / rows as f64;
        let lon_step = self.delta_longitude() / cols as f64;
        let mut sectors = Vec::with_capacity(cells as usize);

        for row in 0..rows {
            let min_lat = self.min_latitude + row as f64 * lat_step;
            // Snap the last row/column to the parent edge to avoid drift
            let max_lat = if row + 1 == rows {
                self.max_latitude
            } else {
                min_lat + lat_step
            };
            for col in 0..cols {
                let min_lon = self.min_longitude + col as f64 * lon_step;
                let max_lon = if col + 1 == cols {
                    self.max_longitude
                } else {
                    min_lon + lon_step
                };
                sectors.push(Sector {
                    min_latitude: min_lat,
                    max_latitude: max_lat,
                    min_longitude: min_lon,
                    max_longitude: max_lon,
                });
            }
        }

        Ok(sectors)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_latitude, self.max_latitude, self.min_longitude, self.max_longitude
        )
    }
}

impl FromStr for Sector {
    type Err = WcsError;

    /// Parse "minLat,maxLat,minLon,maxLon".
    fn from_str(s: &str) -> WcsResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(WcsError::InvalidSector(format!(
                "{}. Expected 'minLat,maxLat,minLon,maxLon'",
                s
            )));
        }

        let mut values = [0.0; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .trim()
                .parse()
                .map_err(|_| WcsError::InvalidSector(format!("invalid number: {}", part)))?;
        }

        Sector::new(values[0], values[1], values[2], values[3])
    }
}

fn parse_corner(corner: &str) -> WcsResult<(f64, f64)> {
    let parts: Vec<&str> = corner.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(WcsError::InvalidSector(format!(
            "corner '{}' must hold exactly two coordinates",
            corner
        )));
    }

    let first = parts[0]
        .parse()
        .map_err(|_| WcsError::InvalidSector(format!("invalid number: {}", parts[0])))?;
    let second = parts[1]
        .parse()
        .map_err(|_| WcsError::InvalidSector(format!("invalid number: {}", parts[1])))?;

    Ok((first, second))
}
