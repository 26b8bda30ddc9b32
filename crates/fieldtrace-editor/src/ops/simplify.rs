use fieldtrace_core::constants::MIN_RING_VERTICES;
use fieldtrace_core::Ring;
use geo::Simplify;

use crate::model::{line_string_to_ring, ring_to_line_string};

/// Ramer-Douglas-Peucker simplification of each ring, tolerance in degrees.
///
/// Rings with fewer than three vertices pass through untouched; rings that
/// collapse below three vertices are dropped.
pub fn simplify(rings: &[Ring], tolerance: f64) -> Vec<Ring> {
    rings
        .iter()
        .filter_map(|ring| {
            if ring.len() < MIN_RING_VERTICES {
                return Some(ring.clone());
            }
            let simplified = line_string_to_ring(&ring_to_line_string(ring).simplify(&tolerance));
            simplified.is_valid().then_some(simplified)
        })
        .collect()
}
