//! Pivot-circle tool.
//!
//! The first tap fixes the centre, pointer moves track the radius and the
//! second tap commits the clipped, sibling-free circle into the active ring
//! slot. Extra pieces left by clipping become additional rings.

use fieldtrace_core::{Ring, Vertex};
use geo::MultiPolygon;
use serde::Serialize;
use tracing::{debug, info};

use super::{DrawMode, EditSession};
use crate::error::{EditResult, ValidationError};
use crate::model::{exterior_rings, ring_to_polygon};
use crate::ops::circle_to_polygon;

/// Progress of the circle tool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum CircleStep {
    /// Waiting for the centre tap.
    #[default]
    CenterPending,
    /// Centre fixed; the radius follows the pointer.
    RadiusPreview { center: Vertex, radius_m: f64 },
}

impl EditSession {
    /// Switches between polygon drawing and the circle tool.
    pub fn toggle_draw_mode(&mut self) -> EditResult<DrawMode> {
        self.ensure_open()?;
        self.mode = match self.mode {
            DrawMode::Polygon => DrawMode::Circle(CircleStep::CenterPending),
            DrawMode::Circle(_) => DrawMode::Polygon,
        };
        debug!(session = %self.id, mode = ?self.mode, "Draw mode changed");
        Ok(self.mode)
    }

    /// Handles a map tap while the circle tool is active.
    ///
    /// Returns `Ok(true)` when the tap committed a circle.
    pub fn circle_tap(&mut self, at: Vertex) -> EditResult<bool> {
        self.ensure_open()?;
        match self.mode {
            DrawMode::Polygon => Ok(false),
            DrawMode::Circle(CircleStep::CenterPending) => {
                if !at.is_valid() {
                    return Ok(false);
                }
                self.mode = DrawMode::Circle(CircleStep::RadiusPreview {
                    center: at,
                    radius_m: 0.0,
                });
                Ok(false)
            }
            DrawMode::Circle(CircleStep::RadiusPreview { center, .. }) => {
                let radius_m = center.haversine_distance_m(&at);
                self.commit_circle(center, radius_m)
            }
        }
    }

    /// Tracks the pointer while a circle radius is being chosen.
    pub fn circle_pointer_move(&mut self, at: Vertex) -> bool {
        if self.closed || !at.is_valid() {
            return false;
        }
        match self.mode {
            DrawMode::Circle(CircleStep::RadiusPreview { center, .. }) => {
                self.mode = DrawMode::Circle(CircleStep::RadiusPreview {
                    center,
                    radius_m: center.haversine_distance_m(&at),
                });
                true
            }
            _ => false,
        }
    }

    /// Ring shown while the radius is being chosen.
    pub fn circle_preview(&self) -> Option<Ring> {
        match self.mode {
            DrawMode::Circle(CircleStep::RadiusPreview { center, radius_m }) if radius_m > 0.0 => {
                let ring =
                    circle_to_polygon(center, radius_m, self.engine.settings().circle_segments);
                (!ring.is_empty()).then_some(ring)
            }
            _ => None,
        }
    }

    /// Commits a circle of `radius_m` around `center` into the active slot.
    ///
    /// On success the tool returns to polygon drawing.
    pub fn commit_circle(&mut self, center: Vertex, radius_m: f64) -> EditResult<bool> {
        self.ensure_open()?;
        let min_m = self.settings.min_circle_radius_m;
        if !radius_m.is_finite() || radius_m < min_m {
            return Err(ValidationError::CircleTooSmall { radius_m, min_m }.into());
        }

        let ring = circle_to_polygon(center, radius_m, self.engine.settings().circle_segments);
        let shape = ring_to_polygon(&ring)
            .map(|polygon| MultiPolygon::new(vec![polygon]))
            .ok_or(ValidationError::ShapeVanished)?;
        let pieces = self
            .engine
            .net_of(&shape)
            .map(|net| exterior_rings(&net))
            .unwrap_or_default();
        let Some((largest, rest)) = pieces.split_first() else {
            return Err(ValidationError::ShapeVanished.into());
        };

        let changed = self.commit("circle", |parts, active| {
            if parts.is_empty() {
                parts.push(Ring::new());
                *active = 0;
            }
            let slot = (*active).min(parts.len() - 1);
            parts[slot] = largest.clone();
            for (offset, piece) in rest.iter().enumerate() {
                parts.insert(slot + 1 + offset, piece.clone());
            }
            *active = slot;
            Ok(())
        })?;

        self.mode = DrawMode::Polygon;
        info!(
            session = %self.id,
            radius_m,
            pieces = pieces.len(),
            "Circle committed"
        );
        Ok(changed)
    }
}
