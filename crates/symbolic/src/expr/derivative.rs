use super::Expr;

impl Expr {
    /// Returns the partial derivative with respect to `variable`.
    ///
    /// Subtrees that do not contain `variable` differentiate to a literal
    /// zero without being inspected, so an undefined constant factor does
    /// not leak into the derivative.
    #[must_use]
    pub fn derivative(&self, variable: &str) -> Expr {
        if !self.contains(variable) {
            return Expr::Number(0.0);
        }

        let d = |e: &Expr| e.derivative(variable);

        match self {
            Self::Number(_) => Expr::Number(0.0),
            Self::Variable(_) => Expr::Number(1.0),
            Self::Neg(operand) => Expr::negate(d(operand)),
            Self::Add(lhs, rhs) => Expr::sum(d(lhs), d(rhs)),
            Self::Sub(lhs, rhs) => Expr::difference(d(lhs), d(rhs)),
            Self::Mul(lhs, rhs) => Expr::sum(
                Expr::product(d(lhs), (**rhs).clone()),
                Expr::product((**lhs).clone(), d(rhs)),
            ),
            Self::Div(lhs, rhs) => Expr::quotient(
                Expr::difference(
                    Expr::product(d(lhs), (**rhs).clone()),
                    Expr::product((**lhs).clone(), d(rhs)),
                ),
                Expr::power((**rhs).clone(), Expr::Number(2.0)),
            ),
            Self::Pow(base, exponent) => power_rule(base, exponent, variable),
            Self::Call(function, argument) => {
                Expr::product(function.derivative_at(argument), d(argument))
            }
        }
    }
}

/// Differentiates `base ^ exponent`, picking the simplest applicable rule.
fn power_rule(base: &Expr, exponent: &Expr, variable: &str) -> Expr {
    let base_varies = base.contains(variable);
    let exponent_varies = exponent.contains(variable);
    let pow = || Expr::power(base.clone(), exponent.clone());
    let ln_base = || Expr::call(super::Function::Ln, base.clone());

    match (base_varies, exponent_varies) {
        // d(u^c) = c * u^(c - 1) * u'
        (true, false) => Expr::product(
            Expr::product(
                exponent.clone(),
                Expr::power(
                    base.clone(),
                    Expr::difference(exponent.clone(), Expr::Number(1.0)),
                ),
            ),
            base.derivative(variable),
        ),
        // d(c^v) = c^v * ln(c) * v'
        (false, true) => Expr::product(
            Expr::product(pow(), ln_base()),
            exponent.derivative(variable),
        ),
        // d(u^v) = u^v * (v' * ln(u) + v * u' / u)
        (true, true) => Expr::product(
            pow(),
            Expr::sum(
                Expr::product(exponent.derivative(variable), ln_base()),
                Expr::quotient(
                    Expr::product(exponent.clone(), base.derivative(variable)),
                    base.clone(),
                ),
            ),
        ),
        (false, false) => Expr::Number(0.0),
    }
}
