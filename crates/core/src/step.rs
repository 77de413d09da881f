use crate::{Gradient, Point};

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets descent solvers move a value by
/// `derivative * delta`. A negative `delta` moves against the derivative.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

impl StepIntegrable<f64> for Point {
    type Derivative = Gradient;

    fn step(&self, derivative: Gradient, delta: f64) -> Self {
        let Gradient([gx, gy]) = derivative;
        Point::new(self.x + delta * gx, self.y + delta * gy)
    }
}
