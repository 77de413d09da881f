use steepest_core::{Expression, Gradient, Objective, Observer, Point, StepIntegrable};

use crate::{ForbiddenOperation, gradient, line_search::golden_section};

use super::{Action, Config, Error, Event, Trace};

/// Core steepest descent loop.
pub(super) fn run<E, Obs>(
    objective: &Objective<E>,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Trace, Error>
where
    E: Expression,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut points = vec![start];
    let mut current = start;
    let mut iters = 0;

    loop {
        if iters > config.max_iters() {
            return Ok(Trace::diverged(iters));
        }
        iters += 1;

        let (step, direction) = match descend(objective, current, config) {
            Ok(found) => found,
            Err(error) => {
                let event = Event::Failed {
                    iter: iters,
                    point: current,
                    error: &error,
                };
                return match observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(Trace::stopped(points, iters)),
                    None => Err(error.into()),
                };
            }
        };

        let next = current.step(direction, -step);
        points.push(next);

        let event = Event::Stepped {
            iter: iters,
            from: current,
            to: next,
            gradient: direction,
            step,
        };
        let action = observer.observe(&event);

        if has_converged(current, next, config.tolerance()) {
            return Ok(Trace::converged(points, iters));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(Trace::stopped(points, iters));
        }
        current = next;
    }
}

/// Finds the step length, then the gradient it applies to.
fn descend<E: Expression>(
    objective: &Objective<E>,
    point: Point,
    config: &Config,
) -> Result<(f64, Gradient), ForbiddenOperation> {
    let solution = golden_section::minimize(objective, point, config.line_search())?;
    let direction = gradient(objective, point)?;
    Ok((solution.step, direction))
}

fn has_converged(from: Point, to: Point, tolerance: f64) -> bool {
    from.distance(to) < tolerance
}
