//! Footprint geometry parsing.
//!
//! The catalog encodes a footprint ring as one space-separated string of
//! alternating latitude and longitude values (`"lat lon lat lon ..."`).
//! Polygon construction works in `(x, y) = (lon, lat)` order, so every pair
//! is swapped on the way in.

use geo::{LineString, Polygon};
use thiserror::Error;

/// Minimum number of distinct vertices needed to build a footprint ring.
pub const MIN_FOOTPRINT_VERTICES: usize = 3;

/// Errors raised while decoding a catalog point string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The string held no coordinates at all
    #[error("point string is empty")]
    Empty,

    /// A token could not be read as a number
    #[error("invalid coordinate '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    /// A latitude had no matching longitude
    #[error("point string has an odd number of values ({count}); trailing latitude is unpaired")]
    UnpairedValue { count: usize },

    /// Not enough vertices for a polygon ring
    #[error("footprint needs at least {min} vertices, got {count}", min = MIN_FOOTPRINT_VERTICES)]
    TooFewVertices { count: usize },
}

/// Parses a catalog point string into `(lon, lat)` vertices.
///
/// An odd number of values is rejected rather than truncated.
///
/// # Examples
///
/// ```
/// use scenegate::geometry::parse_point_string;
///
/// let points = parse_point_string("10.0 20.0 11.0 21.0").unwrap();
/// assert_eq!(points, vec![(20.0, 10.0), (21.0, 11.0)]);
/// ```
pub fn parse_point_string(s: &str) -> Result<Vec<(f64, f64)>, GeometryError> {
    let values = s
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeometryError::InvalidNumber {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if values.is_empty() {
        return Err(GeometryError::Empty);
    }
    if values.len() % 2 != 0 {
        return Err(GeometryError::UnpairedValue {
            count: values.len(),
        });
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| (pair[1], pair[0]))
        .collect())
}

/// Builds a footprint polygon from a catalog point string.
///
/// The exterior ring is closed automatically if the catalog did not repeat
/// the first vertex.
pub fn footprint_from_point_string(s: &str) -> Result<Polygon<f64>, GeometryError> {
    let points = parse_point_string(s)?;

    let mut distinct = points.len();
    if distinct > 1 && points.first() == points.last() {
        distinct -= 1;
    }
    if distinct < MIN_FOOTPRINT_VERTICES {
        return Err(GeometryError::TooFewVertices { count: distinct });
    }

    Ok(Polygon::new(LineString::from(points), Vec::new()))
}
