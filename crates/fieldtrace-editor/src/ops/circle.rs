use std::f64::consts::PI;

use fieldtrace_core::constants::{EARTH_RADIUS_M, MIN_RING_VERTICES};
use fieldtrace_core::{Ring, Vertex};

/// Approximates a circle as a regular polygon of `segments` sides.
///
/// The polygon radius is scaled so the polygon encloses the same area as
/// the true circle; the longitude offset is stretched by `1 / cos(lat)` so
/// the shape stays round on the ground. Returns an empty ring for a
/// non-positive radius, an invalid centre or fewer than three segments.
pub fn circle_to_polygon(center: Vertex, radius_m: f64, segments: usize) -> Ring {
    if !center.is_valid() || !radius_m.is_finite() || radius_m <= 0.0 || segments < MIN_RING_VERTICES
    {
        return Ring::new();
    }

    let n = segments as f64;
    let step = 2.0 * PI / n;
    let effective = radius_m * (step / step.sin()).sqrt();

    let d_lat = (effective / EARTH_RADIUS_M).to_degrees();
    let cos_lat = center.lat.to_radians().cos().abs().max(1e-12);
    let d_lng = d_lat / cos_lat;

    (0..segments)
        .map(|i| {
            let theta = step * i as f64;
            Vertex::new(center.lat + d_lat * theta.sin(), center.lng + d_lng * theta.cos())
        })
        .collect()
}
