//! GeoJSON-like geometries exchanged with the host.

use serde::{Deserialize, Serialize};

use super::{Position, Ring, Vertex};
use crate::error::{FieldError, Result};

/// Polygon or MultiPolygon in GeoJSON coordinate layout.
///
/// Serialized as a GeoJSON geometry object, e.g.
/// `{"type": "Polygon", "coordinates": [[[lng, lat], ...]]}`. The first ring
/// of each polygon is its exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum FieldGeometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl FieldGeometry {
    /// Builds a geometry from polygon coordinate lists.
    ///
    /// Returns `None` for an empty list, a `Polygon` for exactly one polygon,
    /// and a `MultiPolygon` otherwise.
    pub fn from_polygons(mut polygons: Vec<Vec<Vec<Position>>>) -> Option<Self> {
        match polygons.len() {
            0 => None,
            1 => polygons.pop().map(FieldGeometry::Polygon),
            _ => Some(FieldGeometry::MultiPolygon(polygons)),
        }
    }

    /// Parses GeoJSON text holding a geometry object or a Feature wrapping one.
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let geometry = match value.get("type").and_then(|t| t.as_str()) {
            Some("Feature") => value
                .get("geometry")
                .cloned()
                .ok_or_else(|| FieldError::other("Feature has no geometry"))?,
            _ => value,
        };
        let parsed: FieldGeometry = serde_json::from_value(geometry)?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Serializes the geometry as GeoJSON text.
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The polygons of this geometry, each as a list of rings.
    pub fn polygons(&self) -> &[Vec<Vec<Position>>] {
        match self {
            FieldGeometry::Polygon(rings) => std::slice::from_ref(rings),
            FieldGeometry::MultiPolygon(polygons) => polygons.as_slice(),
        }
    }

    /// Number of polygons (parts).
    pub fn part_count(&self) -> usize {
        self.polygons().len()
    }

    /// Checks that every coordinate is finite and inside the degree range.
    pub fn validate(&self) -> Result<()> {
        for position in self.polygons().iter().flatten().flatten() {
            if !Vertex::from_position(*position).is_valid() {
                return Err(FieldError::InvalidCoordinate {
                    lng: position[0],
                    lat: position[1],
                });
            }
        }
        Ok(())
    }

    /// Extracts the exterior ring of every polygon as an open, editable ring.
    ///
    /// Holes are not editable and are dropped. Rings left with fewer than
    /// three distinct vertices are skipped.
    pub fn to_rings(&self) -> Vec<Ring> {
        self.polygons()
            .iter()
            .filter_map(|polygon| polygon.first())
            .map(|exterior| {
                exterior
                    .iter()
                    .copied()
                    .map(Vertex::from_position)
                    .collect::<Ring>()
                    .deduped()
            })
            .filter(Ring::is_valid)
            .collect()
    }

    /// Like [`to_rings`](Self::to_rings), but fails when no ring survives.
    pub fn editable_rings(&self) -> Result<Vec<Ring>> {
        let rings = self.to_rings();
        if rings.is_empty() {
            return Err(FieldError::NoUsableRing);
        }
        Ok(rings)
    }
}

/// An already-saved field that the edited shape must not overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiblingField {
    pub id: String,
    pub geometry: FieldGeometry,
}

impl SiblingField {
    pub fn new(id: impl Into<String>, geometry: FieldGeometry) -> Self {
        Self {
            id: id.into(),
            geometry,
        }
    }
}

/// The immutable environment of one edit session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldContext {
    /// Parent property outline; the drawn field is confined to it.
    pub boundary: FieldGeometry,
    /// Other saved fields of the same property.
    #[serde(default)]
    pub siblings: Vec<SiblingField>,
    /// Identifier of the field being edited, `None` for a new field.
    #[serde(default)]
    pub field_id: Option<String>,
}

impl FieldContext {
    /// Creates a context for a new field inside `boundary`.
    pub fn new(boundary: FieldGeometry) -> Self {
        Self {
            boundary,
            siblings: Vec::new(),
            field_id: None,
        }
    }

    /// Sets the sibling fields.
    pub fn with_siblings(mut self, siblings: Vec<SiblingField>) -> Self {
        self.siblings = siblings;
        self
    }

    /// Marks the session as editing the saved field `id`.
    pub fn editing(mut self, id: impl Into<String>) -> Self {
        self.field_id = Some(id.into());
        self
    }

    /// True when an existing field is being edited.
    pub fn is_existing_field(&self) -> bool {
        self.field_id.is_some()
    }
}

/// The value handed to the persistence collaborator on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedField {
    pub geometry: FieldGeometry,
    #[serde(rename = "areaHectares")]
    pub area_hectares: f64,
}
