use fieldtrace_editor::model::{
    field_geometry_to_multi_polygon, multi_polygon_area_hectares, rings_to_multi_polygon,
};
use fieldtrace_editor::ops::{perform_boolean, BooleanOp};
use fieldtrace_editor::clip_to_boundary;
use fieldtrace_settings::EngineSettings;

use crate::support::{boundary, rect, relative_error};

#[test]
fn test_clip_is_idempotent() {
    let settings = EngineSettings::default();
    let boundary = field_geometry_to_multi_polygon(&boundary());
    let shapes = [
        rect(800.0, 800.0, 400.0, 400.0),
        rect(-100.0, 300.0, 1200.0, 200.0),
        rect(100.0, 100.0, 200.0, 200.0),
    ];
    for ring in &shapes {
        let target = rings_to_multi_polygon(std::slice::from_ref(ring));
        let once = clip_to_boundary(&target, &boundary, &settings)
            .unwrap()
            .unwrap();
        let twice = clip_to_boundary(&once, &boundary, &settings)
            .unwrap()
            .unwrap();
        assert!(
            relative_error(
                multi_polygon_area_hectares(&twice),
                multi_polygon_area_hectares(&once)
            ) < 1e-9
        );
    }
}

#[test]
fn test_clip_result_stays_inside_boundary() {
    let settings = EngineSettings::default();
    let boundary = field_geometry_to_multi_polygon(&boundary());
    let target = rings_to_multi_polygon(&[rect(-200.0, -200.0, 600.0, 600.0)]);
    let clipped = clip_to_boundary(&target, &boundary, &settings)
        .unwrap()
        .unwrap();

    let outside = perform_boolean(&clipped, &boundary, BooleanOp::Difference).unwrap();
    assert!(multi_polygon_area_hectares(&outside) < 1e-6);
    assert!(relative_error(multi_polygon_area_hectares(&clipped), 16.0) < 1e-2);
}

#[test]
fn test_clip_outside_boundary_is_none() {
    let settings = EngineSettings::default();
    let boundary = field_geometry_to_multi_polygon(&boundary());
    let target = rings_to_multi_polygon(&[rect(2000.0, 2000.0, 100.0, 100.0)]);
    assert!(clip_to_boundary(&target, &boundary, &settings)
        .unwrap()
        .is_none());
}
