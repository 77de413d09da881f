use steepest_core::{Objective, Point};
use steepest_solvers::steepest_descent::Config;
use steepest_symbolic::Expr;

use crate::AppError;

/// Tolerance used when the tolerance field is blank.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// The variables every function is minimized over, in order.
pub const VARIABLES: [&str; 2] = ["x", "y"];

/// Raw text fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// The function to minimize, e.g. `x^2 + y^2`.
    pub function: String,

    /// Start coordinate for `x`.
    pub x0: String,

    /// Start coordinate for `y`.
    pub y0: String,

    /// Convergence tolerance. Blank means [`DEFAULT_TOLERANCE`].
    pub tolerance: String,
}

/// A validated minimization request.
#[derive(Debug, Clone)]
pub struct Request {
    objective: Objective<Expr>,
    start: Point,
    config: Config,
}

impl Input {
    /// Creates input with a blank tolerance.
    pub fn new(function: impl Into<String>, x0: impl Into<String>, y0: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            x0: x0.into(),
            y0: y0.into(),
            tolerance: String::new(),
        }
    }

    /// Sets the tolerance field.
    #[must_use]
    pub fn with_tolerance(self, tolerance: impl Into<String>) -> Self {
        Self {
            tolerance: tolerance.into(),
            ..self
        }
    }

    /// Validates every field into a [`Request`].
    ///
    /// All fields are checked. When several are wrong, the tolerance error
    /// wins over the start point error, which wins over the function error.
    ///
    /// # Errors
    ///
    /// Returns the [`AppError`] for the highest-priority invalid field, or
    /// [`AppError::MissingArguments`] if the function is not over `x` and `y`.
    pub fn parse(&self) -> Result<Request, AppError> {
        let function = parse_function(&self.function);
        let start = parse_start(&self.x0, &self.y0);
        let config = parse_tolerance(&self.tolerance);

        let config = config?;
        let start = start?;
        let function = function?;

        let objective =
            Objective::new(function, VARIABLES).map_err(|_| AppError::MissingArguments)?;

        Ok(Request {
            objective,
            start,
            config,
        })
    }
}

impl Request {
    /// Returns the function paired with [`VARIABLES`].
    #[must_use]
    pub fn objective(&self) -> &Objective<Expr> {
        &self.objective
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn parse_function(text: &str) -> Result<Expr, AppError> {
    let function: Expr = text.parse().map_err(AppError::IncorrectFunction)?;
    if function.free_variables().len() != 2 {
        return Err(AppError::IncorrectDimension);
    }
    Ok(function)
}

fn parse_start(x0: &str, y0: &str) -> Result<Point, AppError> {
    let x = constant(x0).ok_or(AppError::IncorrectStart)?;
    let y = constant(y0).ok_or(AppError::IncorrectStart)?;
    Ok(Point::new(x, y))
}

fn parse_tolerance(text: &str) -> Result<Config, AppError> {
    let tolerance = if text.trim().is_empty() {
        DEFAULT_TOLERANCE
    } else {
        constant(text).ok_or(AppError::IncorrectTolerance)?
    };
    let defaults = Config::default();
    Config::new(tolerance, defaults.max_iters()).map_err(|_| AppError::IncorrectTolerance)
}

/// Evaluates a constant expression such as `0,5`, `1/3` or `pi`.
fn constant(text: &str) -> Option<f64> {
    let expr: Expr = text.replace(',', ".").parse().ok()?;
    if !expr.free_variables().is_empty() {
        return None;
    }
    expr.eval(&[]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constants_accept_comma_and_expressions() {
        assert_relative_eq!(constant("0,5").unwrap(), 0.5);
        assert_relative_eq!(constant("1/4").unwrap(), 0.25);
        assert_relative_eq!(constant("-2^2").unwrap(), -4.0);
        assert_relative_eq!(constant("pi").unwrap(), std::f64::consts::PI);
        assert_eq!(constant("a"), None);
        assert_eq!(constant("1/0"), None);
        assert_eq!(constant(""), None);
    }

    #[test]
    fn blank_tolerance_uses_default() {
        let request = Input::new("x^2 + y^2", "1", "2").parse().unwrap();

        assert_relative_eq!(request.config().tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(request.config().max_iters(), 1000);
        assert_eq!(request.start(), Point::new(1.0, 2.0));
        assert_eq!(request.objective().variables(), VARIABLES);
    }

    #[test]
    fn explicit_tolerance_is_parsed() {
        let request = Input::new("x^2 + y^2", "1", "1")
            .with_tolerance("1e-3")
            .parse()
            .unwrap();

        assert_relative_eq!(request.config().tolerance(), 1e-3);
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        for tolerance in ["0", "-1e-3", "aaa"] {
            let result = Input::new("x^2 + y^2", "1", "1")
                .with_tolerance(tolerance)
                .parse();
            assert!(matches!(result, Err(AppError::IncorrectTolerance)), "{tolerance}");
        }
    }

    #[test]
    fn variable_order_is_fixed() {
        let request = Input::new("y^2 + 2x", "3", "4").parse().unwrap();

        assert_eq!(request.objective().bindings(request.start()), [("x", 3.0), ("y", 4.0)]);
    }

    #[test]
    fn error_precedence() {
        let all_wrong = Input::new("+", "a", "1").with_tolerance("?");
        assert!(matches!(all_wrong.parse(), Err(AppError::IncorrectTolerance)));

        let start_and_function = Input::new("+", "a", "1");
        assert!(matches!(start_and_function.parse(), Err(AppError::IncorrectStart)));

        let dimension = Input::new("x^2", "1", "1");
        assert!(matches!(dimension.parse(), Err(AppError::IncorrectDimension)));

        let three = Input::new("x + y + z", "1", "1");
        assert!(matches!(three.parse(), Err(AppError::IncorrectDimension)));
    }
}
