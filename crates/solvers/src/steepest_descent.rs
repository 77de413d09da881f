//! Steepest descent with a golden section line search.
//!
//! # Algorithm
//!
//! Starting from a point `p₀`, each iteration
//!
//! 1. picks a step length `s` with [`golden_section::minimize`],
//! 2. evaluates the gradient `g` at the current point,
//! 3. moves to `p₁ = p₀ - s·g`,
//!
//! and stops once `‖p₁ - p₀‖ < tolerance`. The comparison is strict, so a
//! move exactly as long as the tolerance keeps the iteration going.
//!
//! # Divergence
//!
//! The iteration cap is checked before each iteration is counted, so up to
//! `max_iters + 1` iterations run. Exceeding the cap discards the points and
//! returns an empty [`Trace`] with [`Status::Diverged`]. Divergence is not an
//! error: callers check [`Trace::is_empty`] (or the status).
//!
//! # Observer Events
//!
//! - [`Event::Stepped`] — emitted after each iteration's point is recorded
//! - [`Event::Failed`] — emitted when an evaluation is undefined
//!
//! Returning [`Action::StopEarly`] ends the run with the points recorded so
//! far. On the iteration that converges the run still reports
//! [`Status::Converged`]. If an observer lets a failure pass, it is returned
//! as an [`Error`].
//!
//! [`golden_section::minimize`]: crate::line_search::golden_section::minimize

mod action;
mod config;
mod error;
mod event;
mod run;
mod trace;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use trace::{Status, Trace};

use steepest_core::{Expression, Objective, Observer, Point};

/// Minimizes the objective by steepest descent from `start`.
///
/// The observer receives an [`Event`] after every iteration and on failure.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::ForbiddenOperation`] if an evaluation is undefined and the
/// observer does not stop the run.
pub fn minimize<E, Obs>(
    objective: &Objective<E>,
    start: Point,
    config: &Config,
    observer: Obs,
) -> Result<Trace, Error>
where
    E: Expression,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    run::run(objective, start, config, observer)
}

/// Minimizes the objective by steepest descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::ForbiddenOperation`] if an evaluation is undefined.
pub fn minimize_unobserved<E: Expression>(
    objective: &Objective<E>,
    start: Point,
    config: &Config,
) -> Result<Trace, Error> {
    minimize(objective, start, config, ())
}
