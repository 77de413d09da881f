#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use steepest_core::Point;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// The last move was shorter than the tolerance.
    Converged,

    /// The iteration cap was exceeded. The trace is empty.
    Diverged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The points visited by one steepest descent run, in order.
///
/// A converged trace starts at the start point and ends at the approximate
/// minimizer. A diverged trace is empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Trace {
    status: Status,
    iters: usize,
    points: Vec<Point>,
}

impl Trace {
    pub(super) fn converged(points: Vec<Point>, iters: usize) -> Self {
        Self {
            status: Status::Converged,
            iters,
            points,
        }
    }

    pub(super) fn diverged(iters: usize) -> Self {
        Self {
            status: Status::Diverged,
            iters,
            points: Vec::new(),
        }
    }

    pub(super) fn stopped(points: Vec<Point>, iters: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            iters,
            points,
        }
    }

    /// Returns how the run terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the number of iterations started.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }

    /// Returns the visited points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points were kept, which signals divergence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_diverged(&self) -> bool {
        self.status == Status::Diverged
    }

    /// Returns the last visited point.
    #[must_use]
    pub fn minimizer(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
