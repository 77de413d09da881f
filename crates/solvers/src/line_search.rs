//! One-dimensional searches for the step length along a descent direction.

pub mod golden_section;
