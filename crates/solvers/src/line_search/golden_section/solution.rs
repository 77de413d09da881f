/// The result of a golden section line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Chosen step length, the midpoint of the final bracket.
    pub step: f64,

    /// Width of the final bracket.
    pub width: f64,

    /// Number of shrink rounds performed.
    pub rounds: usize,
}
