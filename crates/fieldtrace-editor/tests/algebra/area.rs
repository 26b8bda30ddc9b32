use fieldtrace_core::{FieldGeometry, Ring, Vertex};
use fieldtrace_editor::model::{geometry_area_hectares, polygon_area_hectares, ring_to_polygon};
use fieldtrace_editor::ring_area;

use crate::support::{rect, relative_error};

#[test]
fn test_ring_area_matches_metric_rectangle() {
    let area = ring_area(&rect(0.0, 0.0, 200.0, 500.0));
    assert!(relative_error(area, 10.0) < 1e-3, "area {}", area);
}

#[test]
fn test_explicitly_closed_ring_has_same_area() {
    let open = rect(0.0, 0.0, 300.0, 300.0);
    let mut closed = open.clone();
    if let Some(first) = open.get(0).copied() {
        closed.push(first);
    }
    assert_eq!(ring_area(&open), ring_area(&closed));
}

#[test]
fn test_polygon_and_ring_area_agree() {
    let ring = rect(100.0, 100.0, 250.0, 400.0);
    let polygon = ring_to_polygon(&ring).unwrap();
    assert!(relative_error(polygon_area_hectares(&polygon), ring_area(&ring)) < 1e-12);
}

#[test]
fn test_multi_polygon_geometry_area_sums_parts() {
    let a = rect(0.0, 0.0, 100.0, 100.0);
    let b = rect(500.0, 500.0, 100.0, 100.0);
    let geometry = FieldGeometry::MultiPolygon(vec![
        vec![a.closed_positions()],
        vec![b.closed_positions()],
    ]);
    let sum = ring_area(&a) + ring_area(&b);
    assert!(relative_error(geometry_area_hectares(&geometry), sum) < 1e-12);
}

#[test]
fn test_area_grows_toward_equator() {
    // same degree extent covers more ground near the equator
    let cell = |lat: f64| {
        Ring::from(vec![
            Vertex::new(lat, 0.0),
            Vertex::new(lat, 0.01),
            Vertex::new(lat + 0.01, 0.01),
            Vertex::new(lat + 0.01, 0.0),
        ])
    };
    assert!(ring_area(&cell(0.0)) > ring_area(&cell(45.0)));
    assert!(relative_error(ring_area(&cell(60.0)) / ring_area(&cell(0.0)), 0.5) < 1e-3);
}
