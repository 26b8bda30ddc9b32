use fieldtrace_core::{FieldContext, SiblingField};
use fieldtrace_editor::model::{field_geometry_to_multi_polygon, multi_polygon_area_hectares};
use fieldtrace_editor::ops::{perform_boolean, BooleanOp};
use fieldtrace_editor::{AreaSource, EditError, EditSession, SessionState, ValidationError};
use fieldtrace_settings::EditorConfig;

use crate::support::{boundary, polygon, rect, relative_error};

#[test]
fn test_editing_field_listed_as_sibling() {
    let field = polygon(&rect(100.0, 100.0, 300.0, 300.0));
    let context = FieldContext::new(boundary())
        .with_siblings(vec![
            SiblingField::new("field-7", field.clone()),
            SiblingField::new("field-8", polygon(&rect(600.0, 600.0, 200.0, 200.0))),
        ])
        .editing("field-7");
    let s = EditSession::new(context, Some(&field), &EditorConfig::default());

    assert_eq!(s.state(), SessionState::Valid);
    assert_eq!(s.engine().siblings().len(), 1);
    let derived = s.derived();
    assert_eq!(derived.area_source, AreaSource::Net);
    assert!(relative_error(derived.area_hectares, 9.0) < 1e-2);
}

#[test]
fn test_stale_copy_of_field_under_other_id_is_ignored() {
    let field = polygon(&rect(100.0, 100.0, 300.0, 300.0));
    let context = FieldContext::new(boundary())
        .with_siblings(vec![SiblingField::new("legacy-copy", field.clone())])
        .editing("field-7");
    let s = EditSession::new(context, Some(&field), &EditorConfig::default());
    assert!(s.engine().siblings().is_empty());
    assert!(relative_error(s.area_hectares(), 9.0) < 1e-2);
}

#[test]
fn test_collapsed_existing_field_reports_gross_but_cannot_be_saved() {
    // the sibling covers the field but is not an exact copy of it
    let field = polygon(&rect(100.0, 100.0, 300.0, 300.0));
    let context = FieldContext::new(boundary())
        .with_siblings(vec![SiblingField::new(
            "neighbour",
            polygon(&rect(50.0, 50.0, 400.0, 400.0)),
        )])
        .editing("field-7");
    let mut s = EditSession::new(context, Some(&field), &EditorConfig::default());

    let derived = s.derived().clone();
    assert_eq!(derived.area_source, AreaSource::GrossFallback);
    assert!(derived.net.is_none());
    assert!(relative_error(derived.area_hectares, 9.0) < 1e-2);

    let err = s.save().unwrap_err();
    assert_eq!(err, EditError::Validation(ValidationError::ShapeVanished));
    assert!(!s.is_closed());
}

#[test]
fn test_saved_existing_field_never_overlaps_neighbour() {
    // the neighbour takes the northern third of the edited field
    let field = polygon(&rect(100.0, 100.0, 300.0, 300.0));
    let neighbour = polygon(&rect(300.0, 50.0, 300.0, 400.0));
    let context = FieldContext::new(boundary())
        .with_siblings(vec![SiblingField::new("neighbour", neighbour)])
        .editing("field-7");
    let mut s = EditSession::new(context, Some(&field), &EditorConfig::default());
    assert_eq!(s.derived().area_source, AreaSource::Net);
    let neighbour = s.engine().siblings()[0].shape.clone();

    let saved = s.save().unwrap();
    let overlap = perform_boolean(
        &field_geometry_to_multi_polygon(&saved.geometry),
        &neighbour,
        BooleanOp::Intersection,
    )
    .unwrap();
    assert!(multi_polygon_area_hectares(&overlap) < 1e-6);
    assert!(relative_error(saved.area_hectares, 6.0) < 1e-2);
}

#[test]
fn test_fallback_can_be_disabled() {
    let field = polygon(&rect(100.0, 100.0, 300.0, 300.0));
    let context = FieldContext::new(boundary())
        .with_siblings(vec![SiblingField::new(
            "overlapping",
            polygon(&rect(50.0, 50.0, 400.0, 400.0)),
        )])
        .editing("field-7");
    let mut config = EditorConfig::default();
    config.engine.self_overlap_fallback = false;
    let mut s = EditSession::new(context, Some(&field), &config);

    assert_eq!(s.derived().area_source, AreaSource::Net);
    assert_eq!(s.area_hectares(), 0.0);
    assert!(s.save().unwrap_err().is_validation());
}
