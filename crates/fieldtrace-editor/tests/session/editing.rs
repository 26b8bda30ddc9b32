use fieldtrace_core::FieldContext;
use fieldtrace_editor::{EditSession, SessionState, VertexRef};
use fieldtrace_settings::EditorConfig;

use crate::support::{boundary, point, rect};

fn session() -> EditSession {
    EditSession::new(FieldContext::new(boundary()), None, &EditorConfig::default())
}

#[test]
fn test_complete_drawing_workflow() {
    let mut s = session();
    assert_eq!(s.state(), SessionState::Empty);

    for v in rect(100.0, 100.0, 300.0, 300.0).iter() {
        s.add_vertex(*v).unwrap();
    }
    assert_eq!(s.state(), SessionState::Valid);
    let area = s.area_hectares();
    assert!((area - 9.0).abs() < 0.05, "area {}", area);

    // drag the north-east corner out by 100 m
    s.move_vertex(VertexRef::new(0, 2), point(500.0, 400.0))
        .unwrap();
    assert!(s.area_hectares() > area);

    s.start_new_part().unwrap();
    for v in rect(600.0, 600.0, 200.0, 200.0).iter() {
        s.add_vertex(*v).unwrap();
    }
    assert_eq!(s.parts().len(), 2);
    assert_eq!(s.active_part(), 1);
    assert_eq!(s.total_vertices(), 8);
}

#[test]
fn test_deleting_only_ring_returns_to_empty() {
    let mut s = session();
    for v in rect(100.0, 100.0, 300.0, 300.0).iter() {
        s.add_vertex(*v).unwrap();
    }
    for _ in 0..4 {
        s.delete_vertex(VertexRef::new(0, 0)).unwrap();
    }
    assert_eq!(s.state(), SessionState::Empty);
    assert_eq!(s.area_hectares(), 0.0);
    assert!(s.derived().net.is_none());
}

#[test]
fn test_dirty_tracking() {
    let mut s = session();
    assert!(!s.is_dirty());
    s.add_vertex(point(100.0, 100.0)).unwrap();
    assert!(s.is_dirty());
    s.mark_clean();
    assert!(!s.is_dirty());

    // a failed gesture does not dirty the session
    assert!(s.start_new_part().is_err());
    assert!(!s.is_dirty());
}

#[test]
fn test_markers_follow_vertex_limit() {
    let mut config = EditorConfig::default();
    config.session.marker_vertex_limit = 3;
    let mut s = EditSession::new(FieldContext::new(boundary()), None, &config);
    let ring = rect(100.0, 100.0, 300.0, 300.0);
    for v in ring.iter().take(3) {
        s.add_vertex(*v).unwrap();
    }
    assert!(s.markers_visible());
    if let Some(v) = ring.get(3) {
        s.add_vertex(*v).unwrap();
    }
    assert!(!s.markers_visible());
    s.undo().unwrap();
    assert!(s.markers_visible());
}
