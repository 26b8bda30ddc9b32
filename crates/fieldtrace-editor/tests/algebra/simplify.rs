use fieldtrace_core::{Ring, Vertex};
use fieldtrace_editor::{ring_area, simplify};

use crate::support::{meters_to_lat, point, relative_error};

/// A square with 50 jittered points per side.
fn noisy_square() -> Ring {
    let mut vertices = Vec::new();
    let side = 500.0;
    let corners = [(0.0, 0.0), (0.0, side), (side, side), (side, 0.0)];
    for (i, &(n0, e0)) in corners.iter().enumerate() {
        let (n1, e1) = corners[(i + 1) % corners.len()];
        for k in 0..50 {
            let t = k as f64 / 50.0;
            let jitter = if k % 2 == 0 { 0.2 } else { -0.2 };
            vertices.push(point(n0 + (n1 - n0) * t + jitter, e0 + (e1 - e0) * t + jitter));
        }
    }
    Ring::from(vertices)
}

#[test]
fn test_simplify_removes_jitter() {
    let ring = noisy_square();
    let out = simplify(std::slice::from_ref(&ring), meters_to_lat(1.0));
    assert_eq!(out.len(), 1);
    assert!(out[0].len() < 10, "kept {} vertices", out[0].len());
    assert!(relative_error(ring_area(&out[0]), ring_area(&ring)) < 1e-2);
}

#[test]
fn test_simplify_is_idempotent() {
    let once = simplify(&[noisy_square()], meters_to_lat(1.0));
    let twice = simplify(&once, meters_to_lat(1.0));
    assert_eq!(once, twice);
}

#[test]
fn test_simplify_preserves_structure() {
    let drawing = Ring::from(vec![Vertex::new(1.0, 1.0)]);
    let rings = vec![noisy_square(), drawing.clone()];
    let out = simplify(&rings, meters_to_lat(1.0));
    assert_eq!(out.len(), 2);
    assert_eq!(out[1], drawing);
}
