use std::fmt;

use super::{EvalError, Expr};

/// A unary elementary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Sqrt,
    Abs,
    Sign,
}

impl Function {
    /// Looks up a function by the name used in expression text.
    ///
    /// `log` is the natural logarithm.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "sign" => Self::Sign,
            _ => return None,
        };
        Some(function)
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Sign => "sign",
        }
    }

    /// Applies the function to a number.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] if `argument` is outside the domain.
    /// Overflowing results are left for the caller to reject.
    pub fn apply(self, argument: f64) -> Result<f64, EvalError> {
        let in_domain = match self {
            Self::Ln => argument > 0.0,
            Self::Sqrt => argument >= 0.0,
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&argument),
            _ => true,
        };
        if !in_domain {
            return Err(EvalError::Domain {
                function: self,
                argument,
            });
        }

        Ok(match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tan => argument.tan(),
            Self::Asin => argument.asin(),
            Self::Acos => argument.acos(),
            Self::Atan => argument.atan(),
            Self::Sinh => argument.sinh(),
            Self::Cosh => argument.cosh(),
            Self::Tanh => argument.tanh(),
            Self::Exp => argument.exp(),
            Self::Ln => argument.ln(),
            Self::Sqrt => argument.sqrt(),
            Self::Abs => argument.abs(),
            Self::Sign if argument == 0.0 => 0.0,
            Self::Sign => argument.signum(),
        })
    }

    /// Returns `f'(u)` for this function `f`, without the chain-rule factor.
    pub(super) fn derivative_at(self, argument: &Expr) -> Expr {
        let u = || argument.clone();
        let one = || Expr::Number(1.0);
        let squared = |e: Expr| Expr::power(e, Expr::Number(2.0));

        match self {
            Self::Sin => Expr::call(Self::Cos, u()),
            Self::Cos => Expr::negate(Expr::call(Self::Sin, u())),
            Self::Tan => Expr::quotient(one(), squared(Expr::call(Self::Cos, u()))),
            Self::Asin => Expr::quotient(
                one(),
                Expr::call(Self::Sqrt, Expr::difference(one(), squared(u()))),
            ),
            Self::Acos => Expr::negate(Self::Asin.derivative_at(&u())),
            Self::Atan => Expr::quotient(one(), Expr::sum(one(), squared(u()))),
            Self::Sinh => Expr::call(Self::Cosh, u()),
            Self::Cosh => Expr::call(Self::Sinh, u()),
            Self::Tanh => Expr::difference(one(), squared(Expr::call(Self::Tanh, u()))),
            Self::Exp => Expr::call(Self::Exp, u()),
            Self::Ln => Expr::quotient(one(), u()),
            Self::Sqrt => Expr::quotient(
                one(),
                Expr::product(Expr::Number(2.0), Expr::call(Self::Sqrt, u())),
            ),
            Self::Abs => Expr::call(Self::Sign, u()),
            Self::Sign => Expr::Number(0.0),
        }
    }

    /// Returns `true` if the function is defined on the whole real line.
    pub(super) fn is_total(self) -> bool {
        matches!(
            self,
            Self::Sin
                | Self::Cos
                | Self::Atan
                | Self::Sinh
                | Self::Cosh
                | Self::Tanh
                | Self::Exp
                | Self::Abs
                | Self::Sign
        )
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
