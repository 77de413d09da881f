use std::fmt;

use steepest_core::Point;
use steepest_solvers::steepest_descent::Trace;

use crate::VARIABLES;

/// The outcome of a converged run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    value: f64,
    minimizer: Point,
    trace: Trace,
}

impl Report {
    pub(crate) fn new(value: f64, minimizer: Point, trace: Trace) -> Self {
        Self {
            value,
            minimizer,
            trace,
        }
    }

    /// Returns the function value at the minimizer.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the last point of the trace.
    #[must_use]
    pub fn minimizer(&self) -> Point {
        self.minimizer
    }

    /// Returns every visited point, starting with the start point.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

/// Formats as `f(x*, y*) = 0.00000; x* = 0.00000; y* = 0.00000; `.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = VARIABLES;
        write!(
            f,
            "f({x}*, {y}*) = {}; {x}* = {}; {y}* = {}; ",
            Fixed(self.value),
            Fixed(self.minimizer.x),
            Fixed(self.minimizer.y),
        )
    }
}

/// Five decimals, with negative values that round to zero shown as zero.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.5}", self.0);
        match text.strip_prefix('-') {
            Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
                f.write_str(magnitude)
            }
            _ => f.write_str(&text),
        }
    }
}
