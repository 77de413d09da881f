use steepest_solvers::{steepest_descent, value};

use crate::{AppError, Report, Request};

/// Minimizes a validated request.
///
/// # Errors
///
/// Returns [`AppError::ForbiddenOperation`] if the function is undefined
/// somewhere along the way, or [`AppError::Divergence`] if the iteration cap
/// is exceeded.
pub fn run(request: &Request) -> Result<Report, AppError> {
    let objective = request.objective();
    let trace =
        steepest_descent::minimize_unobserved(objective, request.start(), request.config())?;

    let Some(minimizer) = trace.minimizer() else {
        return Err(AppError::Divergence);
    };
    let value = value(objective, minimizer)?;

    Ok(Report::new(value, minimizer, trace))
}
