//! Core traits and types for steepest-descent minimization.
//!
//! This crate defines the shared abstractions that the solvers and the
//! expression backends build on:
//!
//! - [`Expression`] — a symbolic scalar function that can be differentiated,
//!   evaluated at numeric bindings, and queried for its free variables
//! - [`Objective`] — an expression paired with the ordered variables it is
//!   minimized over
//! - [`Point`], [`Gradient`] — plain two-dimensional data
//! - [`StepIntegrable`] — stepping a point along a derivative
//! - [`Observer`] — receives solver events and optionally returns control actions

mod expression;
mod objective;
mod observer;
mod point;
mod step;

pub use expression::{Bindings, Expression};
pub use objective::{Objective, ObjectiveError};
pub use observer::Observer;
pub use point::{Gradient, Point};
pub use step::StepIntegrable;
