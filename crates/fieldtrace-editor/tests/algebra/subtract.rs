use fieldtrace_editor::model::{
    field_geometry_to_multi_polygon, multi_polygon_area_hectares, rings_to_multi_polygon,
};
use fieldtrace_editor::ops::{perform_boolean, BooleanOp};
use fieldtrace_editor::{subtract_siblings, SiblingShape};
use fieldtrace_settings::EngineSettings;

use crate::support::{polygon, rect, relative_error};

fn sibling(id: &str, south: f64, west: f64, height: f64, width: f64) -> SiblingShape {
    SiblingShape::new(
        id,
        field_geometry_to_multi_polygon(&polygon(&rect(south, west, height, width))),
    )
}

#[test]
fn test_result_never_overlaps_siblings() {
    let settings = EngineSettings::default();
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);
    let siblings = vec![
        sibling("west", 100.0, -100.0, 200.0, 300.0),
        sibling("north", 500.0, 200.0, 300.0, 200.0),
        sibling("middle", 250.0, 250.0, 100.0, 100.0),
        sibling("far", 5000.0, 5000.0, 100.0, 100.0),
    ];
    let result = subtract_siblings(&target, &siblings, None, &settings);
    let net = result.geometry.unwrap();
    assert!(result.skipped.is_empty());

    for s in &siblings {
        let overlap = perform_boolean(&net, &s.shape, BooleanOp::Intersection).unwrap();
        assert!(
            multi_polygon_area_hectares(&overlap) < 1e-6,
            "net overlaps {}",
            s.id
        );
    }

    // 36 ha minus 4 + 2 + 1 ha of overlap
    assert!(relative_error(multi_polygon_area_hectares(&net), 29.0) < 1e-2);
}

#[test]
fn test_excluded_id_is_not_subtracted() {
    let settings = EngineSettings::default();
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);
    let siblings = vec![sibling("me", 0.0, 0.0, 600.0, 600.0)];
    let result = subtract_siblings(&target, &siblings, Some("me"), &settings);
    let area = multi_polygon_area_hectares(&result.geometry.unwrap());
    assert!(relative_error(area, 36.0) < 1e-2);
}

#[test]
fn test_sibling_splitting_target_gives_two_parts() {
    let settings = EngineSettings::default();
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 300.0, 900.0)]);
    let siblings = vec![sibling("road", -50.0, 400.0, 400.0, 100.0)];
    let result = subtract_siblings(&target, &siblings, None, &settings);
    assert_eq!(result.geometry.unwrap().0.len(), 2);
}

#[test]
fn test_failed_difference_skips_only_that_sibling() {
    let settings = EngineSettings::default();
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);

    // a corrupt record with one corner at infinity
    let mut corrupt = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);
    corrupt.0[0].exterior_mut(|ring| ring.0[1].x = f64::INFINITY);
    let siblings = vec![
        SiblingShape::new("corrupt", corrupt),
        sibling("east", -100.0, 300.0, 800.0, 400.0),
    ];

    let result = subtract_siblings(&target, &siblings, None, &settings);
    assert_eq!(result.skipped, vec!["corrupt".to_string()]);
    let area = multi_polygon_area_hectares(&result.geometry.unwrap());
    assert!(relative_error(area, 18.0) < 1e-2, "area {}", area);
}

#[test]
fn test_collapse_without_cover_skips_sibling() {
    // with a high collapse ratio, losing half the shape counts as a collapse
    // even though the sibling does not cover the target
    let settings = EngineSettings {
        degenerate_ratio: 0.9,
        ..EngineSettings::default()
    };
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);
    let siblings = vec![
        sibling("half", -100.0, 300.0, 800.0, 400.0),
        sibling("corner", -100.0, -100.0, 200.0, 200.0),
    ];

    let result = subtract_siblings(&target, &siblings, None, &settings);
    assert_eq!(result.skipped, vec!["half".to_string()]);
    let area = multi_polygon_area_hectares(&result.geometry.unwrap());
    assert!(relative_error(area, 35.0) < 1e-2, "area {}", area);
}

#[test]
fn test_full_cover_is_not_a_collapse() {
    let settings = EngineSettings::default();
    let target = rings_to_multi_polygon(&[rect(0.0, 0.0, 600.0, 600.0)]);
    let siblings = vec![sibling("all", -100.0, -100.0, 800.0, 800.0)];

    let result = subtract_siblings(&target, &siblings, None, &settings);
    assert!(result.geometry.is_none());
    assert!(result.skipped.is_empty());
}
