//! Polygon algebra used by the edit session.
//!
//! All boolean work goes through [`perform_boolean`], which turns a panic or
//! non-finite output of the underlying sweep into an [`EngineError`].

mod circle;
mod clip;
mod normalize;
mod simplify;
mod subtract;

use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::{BooleanOps, CoordsIter, MultiPolygon};

use crate::error::EngineError;

pub use circle::circle_to_polygon;
pub use clip::{clip_to_boundary, simplify_multi_polygon};
pub use normalize::normalize;
pub use simplify::simplify;
pub use subtract::{subtract_siblings, SiblingShape, Subtraction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

impl BooleanOp {
    fn name(self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Difference => "difference",
            BooleanOp::Intersection => "intersection",
        }
    }
}

pub fn perform_boolean(
    a: &MultiPolygon<f64>,
    b: &MultiPolygon<f64>,
    op: BooleanOp,
) -> Result<MultiPolygon<f64>, EngineError> {
    let failure = EngineError::NumericalFailure {
        operation: op.name(),
    };
    if !is_finite(a) || !is_finite(b) {
        return Err(failure);
    }

    let result = catch_unwind(AssertUnwindSafe(|| match op {
        BooleanOp::Union => a.union(b),
        BooleanOp::Difference => a.difference(b),
        BooleanOp::Intersection => a.intersection(b),
    }))
    .map_err(|_| failure.clone())?;

    if !is_finite(&result) {
        return Err(failure);
    }
    Ok(result)
}

fn is_finite(geometry: &MultiPolygon<f64>) -> bool {
    geometry
        .coords_iter()
        .all(|c| c.x.is_finite() && c.y.is_finite())
}
