use std::error::Error as StdError;

use steepest_core::{Expression, Gradient, Objective, Point};
use thiserror::Error;

/// An evaluation that is undefined at `point`.
///
/// The backend's error (division by zero, a domain violation, ...) is kept
/// as the source.
#[derive(Debug, Error)]
#[error("forbidden operation at ({}, {})", .point.x, .point.y)]
pub struct ForbiddenOperation {
    /// The point at which evaluation failed.
    pub point: Point,

    /// The backend error.
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl ForbiddenOperation {
    pub(crate) fn new<E: StdError + Send + Sync + 'static>(point: Point, err: E) -> Self {
        Self {
            point,
            source: Box::new(err),
        }
    }
}

/// Evaluates the objective at `point`.
///
/// # Errors
///
/// Returns [`ForbiddenOperation`] if the function is undefined at `point`.
pub fn value<E: Expression>(
    objective: &Objective<E>,
    point: Point,
) -> Result<f64, ForbiddenOperation> {
    objective
        .value(point)
        .map_err(|err| ForbiddenOperation::new(point, err))
}

/// Evaluates the gradient of the objective at `point`.
///
/// Each partial derivative is taken symbolically and then evaluated with
/// both coordinates bound, in variable order. Nothing is cached between
/// calls, so every call differentiates again.
///
/// # Errors
///
/// Returns [`ForbiddenOperation`] on the first partial derivative that is
/// undefined at `point`.
pub fn gradient<E: Expression>(
    objective: &Objective<E>,
    point: Point,
) -> Result<Gradient, ForbiddenOperation> {
    let bindings = objective.bindings(point);
    let [first, second] = objective.variables().map(|variable| {
        objective
            .function()
            .differentiate(variable)
            .substitute(&bindings)
            .map_err(|err| ForbiddenOperation::new(point, err))
    });
    Ok(Gradient::new(first?, second?))
}
