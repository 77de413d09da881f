//! Golden section search for the step length along the negative gradient.
//!
//! # Algorithm
//!
//! For a point `p` with gradient `g`, the search minimizes
//! `φ(s) = f(p - s·g)` over the fixed interval `s ∈ [0, 1]`. Each round
//! places two probes by the golden ratio,
//!
//! ```text
//! x1 = r - (r - l) / φ
//! x2 = l + (r - l) / φ
//! ```
//!
//! and shrinks the bracket from the left when `φ(x1) >= φ(x2)`, otherwise
//! from the right. Ties therefore favor larger steps. The search stops once
//! the bracket is no wider than the configured tolerance and returns its
//! midpoint.
//!
//! # Cost
//!
//! Both probes are evaluated every round, and each evaluation recomputes the
//! gradient at `p`. No value is carried between rounds.
//!
//! # Limitations
//!
//! - **Fixed interval**: steps longer than one gradient length are never tried
//! - **Unimodal assumption**: may settle on a local minimum of `φ`

mod bracket;
mod config;
mod search;
mod solution;


pub use bracket::UNIT_INTERVAL;
pub use config::{Config, ConfigError};
pub use solution::Solution;

use steepest_core::{Expression, Objective, Point};

use crate::ForbiddenOperation;

/// Finds the step length that minimizes the objective along the negative
/// gradient at `point`.
///
/// # Errors
///
/// Returns [`ForbiddenOperation`] if the gradient or the function is
/// undefined at `point` or at any probed point.
pub fn minimize<E: Expression>(
    objective: &Objective<E>,
    point: Point,
    config: &Config,
) -> Result<Solution, ForbiddenOperation> {
    search::search(objective, point, config)
}
