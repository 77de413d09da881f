//! The expression tree and its simplifying constructors.

mod derivative;
mod display;
mod eval;
mod function;

use std::collections::BTreeSet;
use std::ops::{Add, Div, Mul, Neg, Sub};

use steepest_core::{Bindings, Expression};

pub use eval::EvalError;
pub use function::Function;

/// A symbolic scalar expression.
///
/// Build expressions by parsing text, or with the constructors below (or the
/// arithmetic operators), which fold constants and drop identity terms. The
/// enum variants can also be built directly to get a tree without any
/// simplification.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>),
}

impl Expr {
    /// A numeric constant.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// A named variable.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// `-operand`
    #[must_use]
    pub fn negate(operand: Expr) -> Self {
        match operand {
            Self::Number(value) => Self::Number(-value),
            Self::Neg(inner) => *inner,
            other => Self::Neg(Box::new(other)),
        }
    }

    /// `lhs + rhs`
    #[must_use]
    pub fn sum(lhs: Expr, rhs: Expr) -> Self {
        match (lhs, rhs) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a + b),
            (zero, other) | (other, zero) if zero.is_zero() => other,
            (lhs, Self::Neg(rhs)) => Self::difference(lhs, *rhs),
            (lhs, rhs) => Self::Add(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// `lhs - rhs`
    #[must_use]
    pub fn difference(lhs: Expr, rhs: Expr) -> Self {
        match (lhs, rhs) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a - b),
            (lhs, zero) if zero.is_zero() => lhs,
            (zero, rhs) if zero.is_zero() => Self::negate(rhs),
            (lhs, Self::Neg(rhs)) => Self::sum(lhs, *rhs),
            (lhs, rhs) => Self::Sub(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// `lhs * rhs`
    ///
    /// A zero factor only absorbs the other factor when that factor is
    /// defined everywhere, so `0 * (1 / y)` stays undefined at `y = 0`.
    #[must_use]
    pub fn product(lhs: Expr, rhs: Expr) -> Self {
        match (lhs, rhs) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a * b),
            (zero, other) | (other, zero) if zero.is_zero() && other.is_total() => zero,
            (one, other) | (other, one) if one.is_one() => other,
            (Self::Number(m), other) | (other, Self::Number(m)) if m == -1.0 => {
                Self::negate(other)
            }
            (lhs, rhs) => Self::Mul(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// `lhs / rhs`
    ///
    /// Division by a literal zero is kept, so evaluation reports it.
    #[must_use]
    pub fn quotient(lhs: Expr, rhs: Expr) -> Self {
        match (lhs, rhs) {
            (Self::Number(a), Self::Number(b)) if b != 0.0 => Self::Number(a / b),
            (lhs, one) if one.is_one() => lhs,
            (lhs, rhs) => Self::Div(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// `base ^ exponent`
    #[must_use]
    pub fn power(base: Expr, exponent: Expr) -> Self {
        match (base, exponent) {
            (Self::Number(b), Self::Number(e)) if eval::checked_pow(b, e).is_ok() => {
                Self::Number(b.powf(e))
            }
            (base, one) if one.is_one() => base,
            (base, zero) if zero.is_zero() && base.is_total() => Self::Number(1.0),
            (one, exponent) if one.is_one() && exponent.is_total() => one,
            (base, exponent) => Self::Pow(Box::new(base), Box::new(exponent)),
        }
    }

    /// `function(argument)`
    #[must_use]
    pub fn call(function: Function, argument: Expr) -> Self {
        match argument {
            Self::Number(a) => match function.apply(a) {
                Ok(value) if value.is_finite() => Self::Number(value),
                _ => Self::Call(function, Box::new(Self::Number(a))),
            },
            argument => Self::Call(function, Box::new(argument)),
        }
    }

    /// Returns `true` if the variable occurs anywhere in the expression.
    fn contains(&self, variable: &str) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable(name) => name == variable,
            Self::Neg(operand) | Self::Call(_, operand) => operand.contains(variable),
            Self::Add(lhs, rhs)
            | Self::Sub(lhs, rhs)
            | Self::Mul(lhs, rhs)
            | Self::Div(lhs, rhs)
            | Self::Pow(lhs, rhs) => lhs.contains(variable) || rhs.contains(variable),
        }
    }

    /// Returns the names of all variables occurring in the expression.
    #[must_use]
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Number(_) => {}
            Self::Variable(name) => {
                names.insert(name.clone());
            }
            Self::Neg(operand) | Self::Call(_, operand) => operand.collect_variables(names),
            Self::Add(lhs, rhs)
            | Self::Sub(lhs, rhs)
            | Self::Mul(lhs, rhs)
            | Self::Div(lhs, rhs)
            | Self::Pow(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Number(v) if *v == 0.0)
    }

    fn is_one(&self) -> bool {
        matches!(self, Self::Number(v) if *v == 1.0)
    }

    /// Returns `true` if the expression is defined for every finite binding.
    ///
    /// Conservative: `false` only means the check could not prove it.
    fn is_total(&self) -> bool {
        match self {
            Self::Number(v) => v.is_finite(),
            Self::Variable(_) => true,
            Self::Neg(operand) => operand.is_total(),
            Self::Add(lhs, rhs) | Self::Sub(lhs, rhs) | Self::Mul(lhs, rhs) => {
                lhs.is_total() && rhs.is_total()
            }
            Self::Div(..) => false,
            Self::Pow(base, exponent) => {
                base.is_total()
                    && matches!(**exponent, Self::Number(e) if e >= 0.0 && e.fract() == 0.0)
            }
            Self::Call(function, argument) => function.is_total() && argument.is_total(),
        }
    }
}

impl Expression for Expr {
    type Error = EvalError;

    fn differentiate(&self, variable: &str) -> Self {
        self.derivative(variable)
    }

    fn substitute(&self, bindings: &Bindings<'_>) -> Result<f64, Self::Error> {
        self.eval(bindings)
    }

    fn free_variables(&self) -> BTreeSet<String> {
        Expr::free_variables(self)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::difference(self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product(self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::quotient(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::negate(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
