//! Immutable DEM coverage map.

use std::path::Path;

use geo::{Area, BooleanOps, BoundingRect, Intersects, MultiPolygon, Polygon, Rect};
use tracing::{debug, info};

use super::geojson::first_feature_shape;
use super::CoverageError;

/// DEM coverage mask bundled with the library.
///
/// This is a coarse placeholder of five continental outlines, not a
/// surveyed DEM extent. Deployments should point `[coverage] file` in the
/// config file at the real coverage GeoJSON.
pub const BUNDLED_COVERAGE_GEOJSON: &str = include_str!("../../data/dem_coverage_map.geojson");

/// A coverage polygon together with its precomputed bounds.
#[derive(Debug, Clone)]
struct CoveragePolygon {
    polygon: Polygon<f64>,
    bounds: Rect<f64>,
}

/// Union of regions with auxiliary elevation data.
///
/// Built once and never mutated, so a single instance can be shared
/// (typically behind an `Arc`) by any number of concurrent validations.
///
/// # Examples
///
/// ```
/// use geo::polygon;
/// use scenegate::coverage::CoverageMap;
///
/// let map = CoverageMap::from_polygons(vec![
///     polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
/// ])
/// .unwrap();
///
/// let inside = polygon![(x: 0.5, y: 0.5), (x: 2.0, y: 0.5), (x: 2.0, y: 2.0)];
/// assert!(map.covers(&inside));
/// ```
#[derive(Debug, Clone)]
pub struct CoverageMap {
    polygons: Vec<CoveragePolygon>,
}

impl CoverageMap {
    /// Builds a map from a GeoJSON document, reading `features[0].geometry`.
    pub fn from_geojson_str(json: &str) -> Result<Self, CoverageError> {
        let shape = first_feature_shape(json)?;
        Self::from_polygons(shape.0)
    }

    /// Builds a map from a GeoJSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CoverageError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoverageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "Read coverage file");
        Self::from_geojson_str(&json)
    }

    /// Builds a map from raw `(lon, lat)` polygons.
    ///
    /// The input may be topologically invalid (self-intersections,
    /// duplicate vertices, overlapping parts); it is normalized into
    /// valid polygons without changing the covered extent.
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Result<Self, CoverageError> {
        let raw_count = polygons.len();
        let polygons: Vec<CoveragePolygon> = normalize(polygons)
            .into_iter()
            .filter_map(|polygon| {
                let bounds = polygon.bounding_rect()?;
                Some(CoveragePolygon { polygon, bounds })
            })
            .collect();

        if polygons.is_empty() {
            return Err(CoverageError::Empty);
        }

        debug!(
            input = raw_count,
            normalized = polygons.len(),
            "Normalized coverage polygons"
        );
        Ok(Self { polygons })
    }

    /// Returns true if `footprint` shares at least one point with any
    /// coverage polygon. Touching at a single boundary point counts.
    pub fn covers(&self, footprint: &Polygon<f64>) -> bool {
        let Some(footprint_bounds) = footprint.bounding_rect() else {
            return false;
        };
        self.polygons.iter().any(|coverage| {
            coverage.bounds.intersects(&footprint_bounds) && coverage.polygon.intersects(footprint)
        })
    }

    /// The normalized coverage polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<f64>> {
        self.polygons.iter().map(|c| &c.polygon)
    }

    /// Number of normalized polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// A built map always holds at least one polygon.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Bounding box of the whole map.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.polygons
            .iter()
            .map(|c| c.bounds)
            .reduce(|a, b| {
                Rect::new(
                    (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                    (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
                )
            })
    }

    /// Planar area of the map in square degrees.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(|c| c.polygon.unsigned_area()).sum()
    }
}

/// Loads the bundled DEM coverage map.
///
/// Call once at startup and share the result; the resource is compiled
/// into the binary so this only fails if the bundled data is corrupt.
pub fn load_coverage() -> Result<CoverageMap, CoverageError> {
    let map = CoverageMap::from_geojson_str(BUNDLED_COVERAGE_GEOJSON)?;
    info!(polygons = map.len(), "Loaded bundled DEM coverage map");
    Ok(map)
}

/// Zero-width-buffer equivalent: each part is cleaned on its own, the
/// parts are merged, then every merged polygon is cleaned again.
fn normalize(polygons: Vec<Polygon<f64>>) -> Vec<Polygon<f64>> {
    let merged = polygons
        .into_iter()
        .map(clean)
        .fold(MultiPolygon::new(Vec::new()), |acc, part| acc.union(&part));

    merged.0.into_iter().flat_map(|polygon| clean(polygon).0).collect()
}

fn clean(polygon: Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon]).union(&MultiPolygon::new(Vec::new()))
}
