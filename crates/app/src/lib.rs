//! Text-field front end for steepest-descent minimization.
//!
//! [`Input`] holds the raw text a user typed: a function of `x` and `y`, the
//! two start coordinates and an optional tolerance. [`Input::parse`] turns it
//! into a validated [`Request`], and [`run`] minimizes it into a [`Report`].
//! Every failure is an [`AppError`] whose message is the one shown to users.

mod error;
mod input;
mod report;
mod run;

pub use error::AppError;
pub use input::{DEFAULT_TOLERANCE, Input, Request, VARIABLES};
pub use report::Report;
pub use run::run;
