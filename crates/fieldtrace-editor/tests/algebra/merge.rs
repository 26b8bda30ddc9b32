use fieldtrace_core::{FieldGeometry, Ring, Vertex};
use fieldtrace_editor::merge_rings_to_multipolygon;

use crate::support::rect;

#[test]
fn test_merge_keeps_drawing_order() {
    let a = rect(0.0, 0.0, 100.0, 100.0);
    let b = rect(300.0, 300.0, 100.0, 100.0);
    match merge_rings_to_multipolygon(&[a.clone(), Ring::new(), b.clone()]) {
        Some(FieldGeometry::MultiPolygon(polygons)) => {
            assert_eq!(polygons.len(), 2);
            assert_eq!(polygons[0][0], a.closed_positions());
            assert_eq!(polygons[1][0], b.closed_positions());
        }
        other => panic!("expected MultiPolygon, got {:?}", other),
    }
}

#[test]
fn test_merge_drops_duplicate_vertices() {
    let v = |lat, lng| Vertex::new(lat, lng);
    let ring = Ring::from(vec![
        v(0.0, 0.0),
        v(0.0, 0.0),
        v(0.0, 0.01),
        v(0.01, 0.01),
        v(0.01, 0.01),
    ]);
    match merge_rings_to_multipolygon(&[ring]) {
        Some(FieldGeometry::Polygon(rings)) => assert_eq!(rings[0].len(), 4),
        other => panic!("expected Polygon, got {:?}", other),
    }
}
