use std::fmt;

use super::Expr;

const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const PREFIX: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Self::Number(value) if value.is_sign_negative() => PREFIX,
            Self::Number(_) | Self::Variable(_) | Self::Call(..) => ATOM,
            Self::Neg(_) => PREFIX,
            Self::Add(..) | Self::Sub(..) => SUM,
            Self::Mul(..) | Self::Div(..) => PRODUCT,
            Self::Pow(..) => POWER,
        }
    }
}

/// Writes `expr`, parenthesized if it binds looser than `min`.
fn operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Neg(inner) => {
                f.write_str("-")?;
                operand(f, inner, POWER)
            }
            Self::Add(lhs, rhs) => {
                operand(f, lhs, SUM)?;
                f.write_str(" + ")?;
                operand(f, rhs, SUM + 1)
            }
            Self::Sub(lhs, rhs) => {
                operand(f, lhs, SUM)?;
                f.write_str(" - ")?;
                operand(f, rhs, SUM + 1)
            }
            Self::Mul(lhs, rhs) => {
                operand(f, lhs, PRODUCT)?;
                f.write_str("*")?;
                operand(f, rhs, PRODUCT + 1)
            }
            Self::Div(lhs, rhs) => {
                operand(f, lhs, PRODUCT)?;
                f.write_str("/")?;
                operand(f, rhs, PRODUCT + 1)
            }
            Self::Pow(base, exponent) => {
                operand(f, base, ATOM)?;
                f.write_str("^")?;
                operand(f, exponent, PREFIX)
            }
            Self::Call(function, argument) => write!(f, "{function}({argument})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(text: &str) -> String {
        text.parse::<Expr>().expect("valid expression").to_string()
    }

    #[test]
    fn prints_with_minimal_parentheses() {
        assert_eq!(shown("x^2 + y"), "x^2 + y");
        assert_eq!(shown("(x + y)^2"), "(x + y)^2");
        assert_eq!(shown("x - (y - 1)"), "x - (y - 1)");
        assert_eq!(shown("(x - y) - 1"), "x - y - 1");
        assert_eq!(shown("x / (2y)"), "x/(2*y)");
        assert_eq!(shown("-x^2"), "-x^2");
        assert_eq!(shown("(-x)^2"), "(-x)^2");
        assert_eq!(shown("2^-x"), "2^-x");
        assert_eq!(shown("x^y^2"), "x^y^2");
        assert_eq!(shown("(x^y)^2"), "(x^y)^2");
        assert_eq!(shown("sin(x y)"), "sin(x*y)");
    }

    #[test]
    fn printed_form_parses_back_to_the_same_tree() {
        for text in ["x/y", "exp(-x^2 - y^2)", "(x - 1)^2 + 100(y - x^2)^2", "-(x + y)"] {
            let expr: Expr = text.parse().unwrap();
            let reparsed: Expr = expr.to_string().parse().unwrap();
            assert_eq!(reparsed, expr, "{text} printed as {expr}");
        }
    }
}
