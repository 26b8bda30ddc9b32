//! Geographic data model
//!
//! Vertices and rings as the editor manipulates them, plus the GeoJSON-like
//! geometries exchanged with the host application.

mod geometry;

pub use geometry::{FieldContext, FieldGeometry, SavedField, SiblingField};

use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_M, MIN_RING_VERTICES};

/// A GeoJSON position: `[longitude, latitude]` in decimal degrees.
pub type Position = [f64; 2];

/// A map vertex in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl Vertex {
    /// Creates a vertex from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a vertex from a GeoJSON `[lng, lat]` position.
    pub fn from_position(position: Position) -> Self {
        Self {
            lat: position[1],
            lng: position[0],
        }
    }

    /// Returns the GeoJSON `[lng, lat]` position.
    pub fn to_position(self) -> Position {
        [self.lng, self.lat]
    }

    /// True when both components are finite and inside the degree range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to `other` in metres.
    pub fn haversine_distance_m(&self, other: &Vertex) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lng - self.lng).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// An open ring of vertices: the first vertex is not repeated at the end.
///
/// Rings are built up one vertex at a time while drawing, so any length is
/// representable; only rings with at least three vertices enclose an area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<Vertex>);

impl Ring {
    /// Creates an empty ring.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the vertices in drawing order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the ring has enough vertices to enclose an area.
    pub fn is_valid(&self) -> bool {
        self.0.len() >= MIN_RING_VERTICES
    }

    /// Returns the vertex at `index`.
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.0.get(index)
    }

    /// Appends a vertex.
    pub fn push(&mut self, vertex: Vertex) {
        self.0.push(vertex);
    }

    /// Replaces the vertex at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, vertex: Vertex) -> Option<Vertex> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, vertex))
    }

    /// Removes the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Vertex> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Iterates the vertices.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.0.iter()
    }

    /// Returns a copy without duplicate-adjacent vertices.
    ///
    /// A trailing vertex equal to the first one (an explicitly closed ring) is
    /// dropped as well, so the result is always open.
    pub fn deduped(&self) -> Ring {
        let mut out: Vec<Vertex> = Vec::with_capacity(self.0.len());
        for v in &self.0 {
            if out.last() != Some(v) {
                out.push(*v);
            }
        }
        while out.len() > 1 && out.first() == out.last() {
            out.pop();
        }
        Ring(out)
    }

    /// GeoJSON positions of the closed ring (first position repeated last).
    pub fn closed_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.0.iter().map(|v| v.to_position()).collect();
        if let Some(first) = positions.first().copied() {
            positions.push(first);
        }
        positions
    }

    /// Consumes the ring, returning its vertices.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.0
    }
}

impl From<Vec<Vertex>> for Ring {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }
}

impl FromIterator<Vertex> for Ring {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
