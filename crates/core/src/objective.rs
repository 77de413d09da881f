use thiserror::Error;

use crate::{Expression, Point};

/// A function to minimize, paired with the ordered variables it depends on.
///
/// The variable order is fixed at construction and used for every gradient
/// component and every substitution: the first variable binds to
/// [`Point::x`], the second to [`Point::y`].
#[derive(Debug, Clone)]
pub struct Objective<E> {
    function: E,
    variables: [String; 2],
}

/// Errors that can occur when pairing a function with its variables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectiveError {
    #[error("variable `{0}` is listed twice")]
    DuplicateVariable(String),

    #[error("variable `{0}` does not occur in the function")]
    MissingVariable(String),

    #[error("function depends on unlisted variable `{0}`")]
    UnexpectedVariable(String),
}

impl<E: Expression> Objective<E> {
    /// Pairs `function` with its two variables, in order.
    ///
    /// # Errors
    ///
    /// Returns an error unless the variables are distinct and are exactly the
    /// free variables of `function`.
    pub fn new(function: E, variables: [impl Into<String>; 2]) -> Result<Self, ObjectiveError> {
        let variables: [String; 2] = variables.map(Into::into);
        if variables[0] == variables[1] {
            return Err(ObjectiveError::DuplicateVariable(variables[0].clone()));
        }

        let mut free = function.free_variables();
        for variable in &variables {
            if !free.remove(variable) {
                return Err(ObjectiveError::MissingVariable(variable.clone()));
            }
        }
        if let Some(extra) = free.pop_first() {
            return Err(ObjectiveError::UnexpectedVariable(extra));
        }

        Ok(Self {
            function,
            variables,
        })
    }

    /// Returns the function being minimized.
    pub fn function(&self) -> &E {
        &self.function
    }

    /// Returns the variable names, in order.
    pub fn variables(&self) -> [&str; 2] {
        [&self.variables[0], &self.variables[1]]
    }

    /// Binds the coordinates of `point` to the variables, in order.
    pub fn bindings(&self, point: Point) -> [(&str, f64); 2] {
        let [first, second] = self.variables();
        [(first, point.x), (second, point.y)]
    }

    /// Evaluates the function at `point`.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the evaluation is undefined at `point`.
    pub fn value(&self, point: Point) -> Result<f64, E::Error> {
        self.function.substitute(&self.bindings(point))
    }
}
