use steepest_core::{Expression, Objective, Point, StepIntegrable};

use crate::{ForbiddenOperation, gradient, value};

use super::{
    Config, Solution,
    bracket::{Bracket, UNIT_INTERVAL},
};

/// Core golden section loop.
pub(super) fn search<E: Expression>(
    objective: &Objective<E>,
    point: Point,
    config: &Config,
) -> Result<Solution, ForbiddenOperation> {
    let mut bracket = Bracket::new(UNIT_INTERVAL);
    let mut rounds = 0;

    while bracket.width() > config.tolerance() {
        let [x1, x2] = bracket.probes();
        let y1 = descent_value(objective, point, x1)?;
        let y2 = descent_value(objective, point, x2)?;

        let before = bracket;
        if y1 >= y2 {
            bracket.shrink_left(x1);
        } else {
            bracket.shrink_right(x2);
        }
        rounds += 1;

        // Floating-point resolution can leave the bracket unchanged.
        if bracket == before {
            break;
        }
    }

    Ok(Solution {
        step: bracket.midpoint(),
        width: bracket.width(),
        rounds,
    })
}

/// Evaluates `f(point - step·∇f(point))`.
fn descent_value<E: Expression>(
    objective: &Objective<E>,
    point: Point,
    step: f64,
) -> Result<f64, ForbiddenOperation> {
    let direction = gradient(objective, point)?;
    value(objective, point.step(direction, -step))
}
