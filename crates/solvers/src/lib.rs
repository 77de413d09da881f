//! Solvers for steepest-descent minimization of two-variable functions.
//!
//! - [`gradient`] evaluates the gradient of an [`Objective`] at a point
//! - [`line_search::golden_section`] picks the step length along the
//!   negative gradient
//! - [`steepest_descent`] iterates the two until the point stops moving
//!
//! Every evaluation failure surfaces as a [`ForbiddenOperation`].
//!
//! [`Objective`]: steepest_core::Objective

mod evaluate;

pub mod line_search;
pub mod steepest_descent;

pub use evaluate::{ForbiddenOperation, gradient, value};
