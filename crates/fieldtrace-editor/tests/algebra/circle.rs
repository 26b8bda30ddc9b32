use std::f64::consts::PI;

use fieldtrace_editor::{circle_to_polygon, ring_area};

use crate::support::{point, relative_error};

#[test]
fn test_circle_area_within_a_thousandth() {
    for radius in [50.0, 300.0, 500.0, 1500.0] {
        let ring = circle_to_polygon(point(0.0, 0.0), radius, 64);
        let expected = PI * radius * radius / 10_000.0;
        let area = ring_area(&ring);
        assert!(
            relative_error(area, expected) < 1e-3,
            "radius {} area {} expected {}",
            radius,
            area,
            expected
        );
    }
}

#[test]
fn test_circle_is_round_on_the_ground() {
    let center = point(0.0, 0.0);
    let ring = circle_to_polygon(center, 400.0, 64);
    let distances: Vec<f64> = ring
        .iter()
        .map(|v| center.haversine_distance_m(v))
        .collect();
    let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = distances.iter().cloned().fold(0.0, f64::max);
    assert!(max - min < 0.5, "min {} max {}", min, max);
}

#[test]
fn test_segment_count_is_respected() {
    assert_eq!(circle_to_polygon(point(0.0, 0.0), 100.0, 8).len(), 8);
    assert_eq!(circle_to_polygon(point(0.0, 0.0), 100.0, 128).len(), 128);
}
