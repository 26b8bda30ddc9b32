//! Ring validity and multi-ring consolidation.

use fieldtrace_core::constants::{MIN_CLOSED_RING_COORDS, MIN_RING_VERTICES};
use fieldtrace_core::{FieldGeometry, Position, Ring};
use geo::{MultiPolygon, Polygon};

use super::area::polygon_area_hectares;
use super::convert::{line_string_to_ring, ring_to_line_string};

/// Closes a ring and wraps it as a single-ring polygon.
///
/// Returns `None` below three vertices.
pub fn ring_to_polygon(ring: &Ring) -> Option<Polygon<f64>> {
    if ring.len() < MIN_RING_VERTICES {
        return None;
    }
    Some(Polygon::new(ring_to_line_string(ring), vec![]))
}

/// Merges the drawn rings into one host geometry.
///
/// Each ring is stripped of duplicate-adjacent vertices and closed; rings
/// with fewer than four closed coordinates are discarded. Returns `None`
/// when no ring qualifies, a `Polygon` for exactly one ring and a
/// `MultiPolygon` otherwise.
pub fn merge_rings_to_multipolygon(rings: &[Ring]) -> Option<FieldGeometry> {
    let polygons: Vec<Vec<Vec<Position>>> = rings
        .iter()
        .map(|ring| ring.deduped().closed_positions())
        .filter(|closed| closed.len() >= MIN_CLOSED_RING_COORDS)
        .map(|closed| vec![closed])
        .collect();
    FieldGeometry::from_polygons(polygons)
}

/// Same consolidation as [`merge_rings_to_multipolygon`], as a `geo` multipolygon.
pub fn rings_to_multi_polygon(rings: &[Ring]) -> MultiPolygon<f64> {
    let polygons = rings
        .iter()
        .map(Ring::deduped)
        .filter_map(|ring| ring_to_polygon(&ring))
        .collect();
    MultiPolygon::new(polygons)
}

/// Exterior rings of a multipolygon as open rings, largest part first.
pub fn exterior_rings(geometry: &MultiPolygon<f64>) -> Vec<Ring> {
    let mut parts: Vec<(f64, Ring)> = geometry
        .iter()
        .map(|polygon| {
            (
                polygon_area_hectares(polygon),
                line_string_to_ring(polygon.exterior()),
            )
        })
        .filter(|(_, ring)| ring.is_valid())
        .collect();
    parts.sort_by(|a, b| b.0.total_cmp(&a.0));
    parts.into_iter().map(|(_, ring)| ring).collect()
}
