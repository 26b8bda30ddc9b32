use fieldtrace_settings::EngineSettings;
use geo::{MultiPolygon, Polygon, Simplify};

use super::normalize::normalize;
use super::{perform_boolean, BooleanOp};
use crate::error::EngineError;

/// Restricts a shape to the property boundary.
///
/// Both inputs are normalized, intersected, simplified with the configured
/// tolerance and normalized again. `Ok(None)` means the shape lies entirely
/// outside the boundary.
pub fn clip_to_boundary(
    target: &MultiPolygon<f64>,
    boundary: &MultiPolygon<f64>,
    settings: &EngineSettings,
) -> Result<Option<MultiPolygon<f64>>, EngineError> {
    let precision = settings.coordinate_precision;
    let target = normalize(target, precision);
    let boundary = normalize(boundary, precision);
    if target.0.is_empty() || boundary.0.is_empty() {
        return Ok(None);
    }

    let clipped = perform_boolean(&target, &boundary, BooleanOp::Intersection)?;
    let clipped = simplify_multi_polygon(&clipped, settings.clip_simplify_tolerance);
    let clipped = normalize(&clipped, precision);

    Ok((!clipped.0.is_empty()).then_some(clipped))
}

/// Ramer-Douglas-Peucker on every ring of a multipolygon.
pub fn simplify_multi_polygon(geometry: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    if tolerance <= 0.0 {
        return geometry.clone();
    }
    let polygons = geometry
        .iter()
        .map(|polygon| {
            Polygon::new(
                polygon.exterior().simplify(&tolerance),
                polygon
                    .interiors()
                    .iter()
                    .map(|hole| hole.simplify(&tolerance))
                    .collect(),
            )
        })
        .collect();
    MultiPolygon::new(polygons)
}
