use std::collections::BTreeSet;

/// Numeric values bound to variable names during substitution.
pub type Bindings<'a> = [(&'a str, f64)];

/// A symbolic scalar expression over named variables.
///
/// Implementations must be pure: differentiating or substituting never
/// mutates the expression, and equal inputs always give equal results.
pub trait Expression: Sized {
    /// The error returned when substitution hits an undefined operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the partial derivative with respect to `variable`.
    ///
    /// Differentiating with respect to a variable that does not occur in the
    /// expression yields an expression equal to zero.
    #[must_use]
    fn differentiate(&self, variable: &str) -> Self;

    /// Substitutes numeric values for variables and evaluates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the evaluation is undefined, for example
    /// on division by zero, an out-of-domain function argument, or a free
    /// variable missing from `bindings`.
    fn substitute(&self, bindings: &Bindings<'_>) -> Result<f64, Self::Error>;

    /// Returns the names of all variables occurring in the expression.
    fn free_variables(&self) -> BTreeSet<String>;
}
