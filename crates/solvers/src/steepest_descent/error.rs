use thiserror::Error;

use crate::ForbiddenOperation;

/// Errors that can occur during steepest descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ForbiddenOperation(#[from] ForbiddenOperation),
}
