//! Spherical polygon area.
//!
//! Uses the spherical-excess approximation popularised by web map tooling:
//! each edge contributes `Δλ · (2 + sin φ1 + sin φ2)`, the sum is scaled by
//! `R² / 2`. This equals the planar shoelace area in Lambert cylindrical
//! equal-area coordinates, so it is exact for the edges as drawn in that
//! projection and accurate to well under 0.1% at field scale.

use fieldtrace_core::constants::{EARTH_RADIUS_M, MIN_RING_VERTICES};
use fieldtrace_core::units::square_meters_to_hectares;
use fieldtrace_core::{FieldGeometry, Ring};
use geo::{Coord, LineString, MultiPolygon, Polygon};

use super::convert::field_geometry_to_multi_polygon;

/// Area of an open ring in hectares.
///
/// Invalid vertices and duplicate-adjacent vertices are ignored; fewer than
/// three remaining vertices yield 0. The result is independent of winding
/// direction and starting vertex.
pub fn ring_area(ring: &Ring) -> f64 {
    let coords: Vec<Coord<f64>> = ring
        .deduped()
        .iter()
        .filter(|v| v.is_valid())
        .map(|v| Coord { x: v.lng, y: v.lat })
        .collect();
    square_meters_to_hectares(spherical_area_m2(&coords))
}

/// Area of a polygon in hectares: exterior minus holes, never negative.
pub fn polygon_area_hectares(polygon: &Polygon<f64>) -> f64 {
    let exterior = line_string_area_m2(polygon.exterior());
    let holes: f64 = polygon.interiors().iter().map(line_string_area_m2).sum();
    square_meters_to_hectares((exterior - holes).max(0.0))
}

/// Area of a multipolygon in hectares.
pub fn multi_polygon_area_hectares(geometry: &MultiPolygon<f64>) -> f64 {
    geometry.iter().map(polygon_area_hectares).sum()
}

/// Area of a host geometry in hectares.
pub fn geometry_area_hectares(geometry: &FieldGeometry) -> f64 {
    multi_polygon_area_hectares(&field_geometry_to_multi_polygon(geometry))
}

fn line_string_area_m2(ring: &LineString<f64>) -> f64 {
    spherical_area_m2(&ring.0)
}

/// Unsigned area in m² of a ring given as lng/lat degrees, closed or open.
fn spherical_area_m2(coords: &[Coord<f64>]) -> f64 {
    let open = match (coords.first(), coords.last()) {
        (Some(first), Some(last)) if coords.len() > 1 && first == last => {
            &coords[..coords.len() - 1]
        }
        _ => coords,
    };
    if open.len() < MIN_RING_VERTICES {
        return 0.0;
    }

    let mut sum = 0.0;
    for (i, p1) in open.iter().enumerate() {
        let p2 = &open[(i + 1) % open.len()];
        sum += (p2.x - p1.x).to_radians()
            * (2.0 + p1.y.to_radians().sin() + p2.y.to_radians().sin());
    }

    (sum * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}
