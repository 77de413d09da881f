/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The interval every search starts from.
pub const UNIT_INTERVAL: [f64; 2] = [0.0, 1.0];

/// Golden section search bracket over step lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    /// Left bound.
    pub(super) left: f64,

    /// Right bound.
    pub(super) right: f64,
}

impl Bracket {
    pub(super) fn new([left, right]: [f64; 2]) -> Self {
        Self { left, right }
    }

    /// Returns the width of the bracket.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns the two interior probes `[x1, x2]`.
    ///
    /// Both are recomputed from the current bounds, so `x1 <= x2` always.
    pub(super) fn probes(&self) -> [f64; 2] {
        let reach = self.width() / PHI;
        [self.right - reach, self.left + reach]
    }

    /// Moves the left bound up to `x1`.
    pub(super) fn shrink_left(&mut self, x1: f64) {
        self.left = x1;
    }

    /// Moves the right bound down to `x2`.
    pub(super) fn shrink_right(&mut self, x2: f64) {
        self.right = x2;
    }
}
