use fieldtrace_core::{FieldContext, FieldGeometry};
use fieldtrace_editor::model::geometry_area_hectares;
use fieldtrace_editor::{EditSession, SessionState};
use fieldtrace_settings::EditorConfig;

use crate::support::{boundary, polygon, rect};

#[test]
fn test_saved_field_json_shape() {
    let mut s = EditSession::new(FieldContext::new(boundary()), None, &EditorConfig::default());
    for v in rect(100.0, 100.0, 300.0, 300.0).iter() {
        s.add_vertex(*v).unwrap();
    }
    let saved = s.save().unwrap();
    assert_eq!(saved.area_hectares, geometry_area_hectares(&saved.geometry));

    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["geometry"]["type"], "Polygon");
    assert!(json["areaHectares"].as_f64().unwrap() > 8.9);
}

#[test]
fn test_geojson_seed_round_trip() {
    let seed = polygon(&rect(100.0, 100.0, 300.0, 300.0))
        .to_geojson_string()
        .unwrap();
    let s = EditSession::from_geojson_seed(
        FieldContext::new(boundary()),
        Some(&seed),
        &EditorConfig::default(),
    );
    assert_eq!(s.state(), SessionState::Valid);
    assert_eq!(s.parts()[0].len(), 4);
    assert!(!s.is_dirty());
}

#[test]
fn test_multi_part_seed_saves_as_multipolygon() {
    let seed = FieldGeometry::MultiPolygon(vec![
        vec![rect(100.0, 100.0, 200.0, 200.0).closed_positions()],
        vec![rect(600.0, 600.0, 200.0, 200.0).closed_positions()],
    ]);
    let mut s = EditSession::new(FieldContext::new(boundary()), Some(&seed), &EditorConfig::default());
    assert_eq!(s.parts().len(), 2);
    let saved = s.save().unwrap();
    assert_eq!(saved.geometry.part_count(), 2);
}
