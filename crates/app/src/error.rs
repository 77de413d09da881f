use steepest_solvers::{ForbiddenOperation, steepest_descent};
use steepest_symbolic::ParseError;
use thiserror::Error;

/// Errors reported to the user.
///
/// The display strings are the exact messages shown in the result field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ERROR: forbidden operation")]
    ForbiddenOperation(#[source] ForbiddenOperation),

    #[error("ERROR: too many iterations, method may diverge")]
    Divergence,

    #[error("ERROR: some arguments missing")]
    MissingArguments,

    #[error("ERROR: incorrect function input")]
    IncorrectFunction(#[source] ParseError),

    #[error("ERROR: incorrect function dimension, consider using function of 2 variables")]
    IncorrectDimension,

    #[error("ERROR: incorrect start point input")]
    IncorrectStart,

    #[error("ERROR: incorrect tolerance input")]
    IncorrectTolerance,
}

impl From<ForbiddenOperation> for AppError {
    fn from(error: ForbiddenOperation) -> Self {
        Self::ForbiddenOperation(error)
    }
}

impl From<steepest_descent::Error> for AppError {
    fn from(error: steepest_descent::Error) -> Self {
        match error {
            steepest_descent::Error::ForbiddenOperation(error) => Self::ForbiddenOperation(error),
        }
    }
}
