use steepest_core::{Gradient, Point};

use crate::ForbiddenOperation;

/// Event emitted by the steepest descent solver.
#[derive(Debug)]
pub enum Event<'a> {
    /// An iteration moved from `from` to `to`.
    Stepped {
        /// Iteration number, starting at 1.
        iter: usize,
        from: Point,
        to: Point,
        /// Gradient at `from`.
        gradient: Gradient,
        /// Step length chosen by the line search.
        step: f64,
    },

    /// An evaluation was undefined during the iteration starting at `point`.
    ///
    /// The failing evaluation may have been at a probe away from `point`;
    /// see [`ForbiddenOperation::point`].
    Failed {
        iter: usize,
        point: Point,
        error: &'a ForbiddenOperation,
    },
}
