use thiserror::Error;

use steepest_core::Bindings;

use super::{Expr, Function};

/// Errors that can occur when evaluating an expression.
///
/// Every variant is a forbidden operation: the expression has no real value
/// at the given bindings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({argument}) is undefined")]
    Domain { function: Function, argument: f64 },

    #[error("negative base {base} raised to non-integer power {exponent}")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("variable `{0}` has no value")]
    Unbound(String),

    #[error("result is not a finite number")]
    NonFinite,
}

impl Expr {
    /// Evaluates the expression with the given variable values.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if any step of the evaluation is undefined or
    /// produces a non-finite value.
    pub fn eval(&self, bindings: &Bindings<'_>) -> Result<f64, EvalError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Variable(name) => bindings
                .iter()
                .find(|(bound, _)| *bound == name.as_str())
                .map(|&(_, value)| value)
                .ok_or_else(|| EvalError::Unbound(name.clone()))?,
            Self::Neg(operand) => -operand.eval(bindings)?,
            Self::Add(lhs, rhs) => lhs.eval(bindings)? + rhs.eval(bindings)?,
            Self::Sub(lhs, rhs) => lhs.eval(bindings)? - rhs.eval(bindings)?,
            Self::Mul(lhs, rhs) => lhs.eval(bindings)? * rhs.eval(bindings)?,
            Self::Div(lhs, rhs) => {
                let numerator = lhs.eval(bindings)?;
                let denominator = rhs.eval(bindings)?;
                if denominator == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                numerator / denominator
            }
            Self::Pow(base, exponent) => {
                return checked_pow(base.eval(bindings)?, exponent.eval(bindings)?);
            }
            Self::Call(function, argument) => function.apply(argument.eval(bindings)?)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// Computes `base ^ exponent` over the reals.
pub(super) fn checked_pow(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::ComplexPower { base, exponent });
    }

    let value = base.powf(exponent);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64, y: f64) -> Result<f64, EvalError> {
        text.parse::<Expr>()
            .expect("valid expression")
            .eval(&[("x", x), ("y", y)])
    }

    #[test]
    fn evaluates_arithmetic() {
        assert_relative_eq!(eval("x^2 + y^2", 3.0, 4.0).unwrap(), 25.0);
        assert_relative_eq!(eval("(x - y) / 2", 3.0, 4.0).unwrap(), -0.5);
        assert_relative_eq!(eval("-x^2", 3.0, 0.0).unwrap(), -9.0);
        assert_relative_eq!(eval("2^-1", 0.0, 0.0).unwrap(), 0.5);
        assert_relative_eq!(eval("(-8)^(1/3 * 3)", 0.0, 0.0).unwrap(), -8.0);
    }

    #[test]
    fn division_by_zero_is_forbidden() {
        assert_eq!(eval("x / y", 1.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval("y^-2", 1.0, 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn domain_violations_are_forbidden() {
        assert_eq!(
            eval("asin(x)", 2.0, 0.0),
            Err(EvalError::Domain {
                function: Function::Asin,
                argument: 2.0
            })
        );
        assert!(matches!(eval("ln(x - y)", 1.0, 1.0), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("x^0.5", -4.0, 0.0), Err(EvalError::ComplexPower { .. })));
    }

    #[test]
    fn overflow_is_forbidden() {
        assert_eq!(eval("exp(x)", 1000.0, 0.0), Err(EvalError::NonFinite));
        assert_eq!(eval("x", f64::NAN, 0.0), Err(EvalError::NonFinite));
    }

    #[test]
    fn unbound_variable_is_reported() {
        let expr: Expr = "x + z".parse().unwrap();
        assert_eq!(
            expr.eval(&[("x", 1.0)]),
            Err(EvalError::Unbound("z".into()))
        );
    }
}
