use fieldtrace_settings::EngineSettings;
use geo::{Area, BoundingRect, Intersects, MultiPolygon};
use tracing::{debug, warn};

use super::normalize::normalize;
use super::{perform_boolean, BooleanOp};

/// A neighbouring field prepared for subtraction.
#[derive(Debug, Clone, PartialEq)]
pub struct SiblingShape {
    pub id: String,
    pub shape: MultiPolygon<f64>,
}

impl SiblingShape {
    pub fn new(id: impl Into<String>, shape: MultiPolygon<f64>) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }
}

/// Result of [`subtract_siblings`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtraction {
    /// Remaining shape, `None` when siblings cover the target completely.
    pub geometry: Option<MultiPolygon<f64>>,
    /// Ids of siblings that were skipped after a failed or degenerate difference.
    pub skipped: Vec<String>,
}

/// Removes every sibling shape from `target`, one at a time.
///
/// A sibling whose id equals `exclude_id` is ignored. When a single
/// difference fails, or collapses the running shape although the sibling
/// does not actually cover it, that sibling is skipped and the loop
/// continues with the previous result.
pub fn subtract_siblings(
    target: &MultiPolygon<f64>,
    siblings: &[SiblingShape],
    exclude_id: Option<&str>,
    settings: &EngineSettings,
) -> Subtraction {
    let mut current = target.clone();
    let mut skipped = Vec::new();

    for sibling in siblings {
        if exclude_id == Some(sibling.id.as_str()) {
            continue;
        }
        if current.0.is_empty() {
            break;
        }
        if !bounds_overlap(&current, &sibling.shape) {
            continue;
        }

        let before = current.unsigned_area();
        let next = match perform_boolean(&current, &sibling.shape, BooleanOp::Difference) {
            Ok(next) => next,
            Err(err) => {
                warn!("Skipping sibling {}: {}", sibling.id, err);
                skipped.push(sibling.id.clone());
                continue;
            }
        };

        let after = next.unsigned_area();
        if before > 0.0
            && after < settings.degenerate_ratio * before
            && !covers(&current, &sibling.shape, before)
        {
            warn!(
                "Skipping sibling {}: difference collapsed from {:e} to {:e}",
                sibling.id, before, after
            );
            skipped.push(sibling.id.clone());
            continue;
        }

        debug!("Subtracted sibling {}", sibling.id);
        current = next;
    }

    let current = normalize(&current, settings.coordinate_precision);
    Subtraction {
        geometry: (!current.0.is_empty()).then_some(current),
        skipped,
    }
}

fn bounds_overlap(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
    match (a.bounding_rect(), b.bounding_rect()) {
        (Some(ra), Some(rb)) => ra.intersects(&rb),
        _ => false,
    }
}

/// True when `sibling` genuinely contains almost all of `current`.
fn covers(current: &MultiPolygon<f64>, sibling: &MultiPolygon<f64>, before: f64) -> bool {
    perform_boolean(current, sibling, BooleanOp::Intersection)
        .map(|overlap| (overlap.unsigned_area() - before).abs() <= 1e-6 * before)
        .unwrap_or(false)
}
