//! A small symbolic expression backend.
//!
//! [`Expr`] implements [`steepest_core::Expression`], so it can be handed
//! straight to the solvers:
//!
//! ```
//! use steepest_core::Expression;
//! use steepest_symbolic::Expr;
//!
//! let f: Expr = "x^2 + 3x y".parse().unwrap();
//! let df_dx = f.differentiate("x");
//!
//! assert_eq!(df_dx.substitute(&[("x", 1.0), ("y", 2.0)]).unwrap(), 8.0);
//! ```
//!
//! Parsing accepts `^` or `**` for powers and implicit multiplication such as
//! `2x` or `3(x + 1)`. Multi-letter names are single variables.

mod expr;
mod parse;

pub use expr::{EvalError, Expr, Function};
pub use parse::ParseError;
