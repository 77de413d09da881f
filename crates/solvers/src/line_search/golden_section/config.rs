use thiserror::Error;

/// Configuration for the golden section line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

/// Errors that can occur when validating a golden section config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and at least f64::EPSILON")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self { tolerance: 1e-3 }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite or is below
    /// [`f64::EPSILON`], the finest width a bracket inside `[0, 1]` resolves.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < f64::EPSILON {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self { tolerance })
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
