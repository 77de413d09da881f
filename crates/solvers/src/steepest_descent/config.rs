use thiserror::Error;

use crate::line_search::golden_section;

/// Configuration for the steepest descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    line_search: golden_section::Config,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: 1000,
            line_search: golden_section::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and the default line search.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite or not positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            line_search: golden_section::Config::default(),
        })
    }

    /// Replaces the line search config.
    #[must_use]
    pub fn with_line_search(self, line_search: golden_section::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Returns the distance between consecutive points below which the
    /// solver has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the line search config.
    #[must_use]
    pub fn line_search(&self) -> &golden_section::Config {
        &self.line_search
    }
}
