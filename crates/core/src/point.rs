#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A candidate solution in the two-dimensional domain.
///
/// Coordinates are ordered to match the variables of the
/// [`Objective`](crate::Objective) being minimized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The gradient of an objective at a point.
///
/// Components are the partial derivatives in variable order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Gradient(pub [f64; 2]);

impl Gradient {
    /// Creates a gradient from its two partial derivatives.
    #[must_use]
    pub const fn new(first: f64, second: f64) -> Self {
        Self([first, second])
    }
}
