//! Minimal GeoJSON reader for the coverage resource.
//!
//! Only `features[0].geometry` is read, and only `Polygon` or `MultiPolygon`
//! geometries are accepted. Positions are `[lon, lat]` with an optional
//! trailing altitude that is ignored.

use geo::{LineString, MultiPolygon, Polygon};
use serde::Deserialize;

use super::CoverageError;

type Ring = Vec<Vec<f64>>;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

/// Reads the first feature's geometry as a multi-polygon.
pub(super) fn first_feature_shape(json: &str) -> Result<MultiPolygon<f64>, CoverageError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or(CoverageError::NoFeatures)?;
    let geometry = feature.geometry.ok_or(CoverageError::MissingGeometry)?;

    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Ring> = serde_json::from_value(geometry.coordinates)?;
            Ok(MultiPolygon::new(vec![polygon_from_rings(rings)?]))
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Ring>> = serde_json::from_value(geometry.coordinates)?;
            let polygons = polygons
                .into_iter()
                .map(polygon_from_rings)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiPolygon::new(polygons))
        }
        other => Err(CoverageError::UnsupportedGeometry(other.to_string())),
    }
}

fn polygon_from_rings(rings: Vec<Ring>) -> Result<Polygon<f64>, CoverageError> {
    let mut rings = rings.into_iter().map(line_string_from_ring);
    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => return Err(CoverageError::InvalidPosition("polygon has no rings".into())),
    };
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn line_string_from_ring(ring: Ring) -> Result<LineString<f64>, CoverageError> {
    ring.into_iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok((*lon, *lat)),
            _ => Err(CoverageError::InvalidPosition(format!("{:?}", position))),
        })
        .collect::<Result<Vec<(f64, f64)>, _>>()
        .map(LineString::from)
}
