//! Derived geometry for one edit session.
//!
//! [`FieldEngine`] owns the normalized boundary and sibling shapes and turns
//! a ring list into gross, clipped and net geometry plus the reported area.

use fieldtrace_core::{FieldContext, FieldGeometry, Ring};
use fieldtrace_settings::EngineSettings;
use geo::MultiPolygon;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::model::{
    field_geometry_to_multi_polygon, multi_polygon_area_hectares, multi_polygon_to_field_geometry,
    rings_to_multi_polygon,
};
use crate::ops::{
    clip_to_boundary, normalize, perform_boolean, subtract_siblings, BooleanOp, SiblingShape,
};

/// Which figure `DerivedGeometry::area_hectares` reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AreaSource {
    #[default]
    Net,
    /// Net area collapsed while editing an existing field; gross is shown.
    /// The net geometry, and therefore what a save accepts, is unchanged.
    GrossFallback,
}

/// Geometry and area derived from the current ring list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedGeometry {
    /// Union of all valid rings.
    pub gross: Option<MultiPolygon<f64>>,
    /// Gross restricted to the boundary.
    pub clipped: Option<MultiPolygon<f64>>,
    /// Clipped minus siblings, or gross when clipping failed.
    pub net: Option<MultiPolygon<f64>>,
    pub gross_area_hectares: f64,
    pub net_area_hectares: f64,
    pub area_hectares: f64,
    pub area_source: AreaSource,
    pub clip_failed: bool,
    pub skipped_siblings: Vec<String>,
}

impl DerivedGeometry {
    /// The geometry that a save hands to persistence.
    ///
    /// Always the net shape: the gross fallback changes the reported area
    /// only, never what gets saved.
    pub fn to_field_geometry(&self) -> Option<FieldGeometry> {
        self.net.as_ref().and_then(multi_polygon_to_field_geometry)
    }

    pub fn is_empty(&self) -> bool {
        self.gross.is_none()
    }
}

/// Polygon algebra bound to one field context.
#[derive(Debug, Clone)]
pub struct FieldEngine {
    boundary: MultiPolygon<f64>,
    siblings: Vec<SiblingShape>,
    field_id: Option<String>,
    settings: EngineSettings,
}

impl FieldEngine {
    /// Prepares the boundary and sibling shapes.
    ///
    /// Siblings with the edited field's id are dropped, as are siblings whose
    /// geometry equals the seed (the edited field listed under another id).
    pub fn new(
        context: &FieldContext,
        seed: Option<&FieldGeometry>,
        settings: EngineSettings,
    ) -> Self {
        let precision = settings.coordinate_precision;
        let boundary = normalize(
            &field_geometry_to_multi_polygon(&context.boundary),
            precision,
        );
        let seed_shape = seed
            .map(|g| normalize(&field_geometry_to_multi_polygon(g), precision))
            .filter(|shape| !shape.0.is_empty());

        let siblings: Vec<SiblingShape> = context
            .siblings
            .iter()
            .filter(|s| context.field_id.as_deref() != Some(s.id.as_str()))
            .filter_map(|s| {
                let shape = normalize(&field_geometry_to_multi_polygon(&s.geometry), precision);
                if shape.0.is_empty() {
                    return None;
                }
                if seed_shape.as_ref() == Some(&shape) {
                    warn!("Sibling {} matches the edited field and is ignored", s.id);
                    return None;
                }
                Some(SiblingShape::new(s.id.clone(), shape))
            })
            .collect();

        debug!(
            siblings = siblings.len(),
            boundary_parts = boundary.0.len(),
            "Field engine prepared"
        );

        Self {
            boundary,
            siblings,
            field_id: context.field_id.clone(),
            settings,
        }
    }

    pub fn boundary(&self) -> &MultiPolygon<f64> {
        &self.boundary
    }

    pub fn siblings(&self) -> &[SiblingShape] {
        &self.siblings
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Recomputes derived geometry for a ring list.
    pub fn compute(&self, parts: &[Ring]) -> DerivedGeometry {
        let Some(gross) = self.gross_of(parts) else {
            return DerivedGeometry::default();
        };
        let clipped = clip_to_boundary(&gross, &self.boundary, &self.settings);
        self.derive(gross, clipped)
    }

    /// Subtracts siblings from a clip result and settles the reported area.
    fn derive(
        &self,
        gross: MultiPolygon<f64>,
        clipped: Result<Option<MultiPolygon<f64>>, EngineError>,
    ) -> DerivedGeometry {
        let gross_area = multi_polygon_area_hectares(&gross);

        let mut derived = DerivedGeometry {
            gross_area_hectares: gross_area,
            ..DerivedGeometry::default()
        };

        match clipped {
            Ok(Some(clipped)) => {
                let subtraction = subtract_siblings(
                    &clipped,
                    &self.siblings,
                    self.field_id.as_deref(),
                    &self.settings,
                );
                derived.net = subtraction.geometry;
                derived.skipped_siblings = subtraction.skipped;
                derived.clipped = Some(clipped);
            }
            Ok(None) => {}
            Err(err) => {
                warn!("Clipping failed, showing gross geometry: {}", err);
                derived.clip_failed = true;
                derived.net = Some(gross.clone());
            }
        }

        derived.net_area_hectares = derived
            .net
            .as_ref()
            .map(multi_polygon_area_hectares)
            .unwrap_or(0.0);
        derived.area_hectares = derived.net_area_hectares;

        let clipped_area = derived
            .clipped
            .as_ref()
            .map(multi_polygon_area_hectares)
            .unwrap_or(0.0);
        let floor = self.settings.collapse_ratio * gross_area;
        if self.settings.self_overlap_fallback
            && self.field_id.is_some()
            && clipped_area >= floor
            && derived.net_area_hectares < floor
        {
            warn!(
                net = derived.net_area_hectares,
                gross = gross_area,
                "Net area collapsed for an existing field, reporting gross area"
            );
            derived.area_source = AreaSource::GrossFallback;
            derived.area_hectares = gross_area;
        }

        debug!(
            gross = gross_area,
            net = derived.net_area_hectares,
            skipped = derived.skipped_siblings.len(),
            "Recomputed derived geometry"
        );
        derived.gross = Some(gross);
        derived
    }

    /// Clips a single shape to the boundary and removes siblings from it.
    ///
    /// A failed clip keeps the shape unclipped.
    pub fn net_of(&self, shape: &MultiPolygon<f64>) -> Option<MultiPolygon<f64>> {
        let clipped = match clip_to_boundary(shape, &self.boundary, &self.settings) {
            Ok(clipped) => clipped?,
            Err(err) => {
                warn!("Clipping failed, keeping shape unclipped: {}", err);
                normalize(shape, self.settings.coordinate_precision)
            }
        };
        subtract_siblings(
            &clipped,
            &self.siblings,
            self.field_id.as_deref(),
            &self.settings,
        )
        .geometry
    }

    /// Union of all valid rings; overlapping parts merge.
    fn gross_of(&self, parts: &[Ring]) -> Option<MultiPolygon<f64>> {
        let merged = rings_to_multi_polygon(parts);
        if merged.0.is_empty() {
            return None;
        }

        let mut polygons = merged.0.iter().cloned();
        let first = MultiPolygon::new(polygons.next().into_iter().collect());
        let union = polygons.try_fold(first, |acc, polygon| {
            perform_boolean(&acc, &MultiPolygon::new(vec![polygon]), BooleanOp::Union)
        });

        let gross = match union {
            Ok(union) => union,
            Err(err) => {
                warn!("Union of parts failed, using parts as drawn: {}", err);
                merged
            }
        };
        (!gross.0.is_empty()).then_some(gross)
    }
}
