use approx::assert_abs_diff_eq;
use quickcheck::{TestResult, quickcheck};
use steepest_core::{Objective, Point};
use steepest_symbolic::Expr;

use crate::line_search::golden_section;

use super::{
    Action, Config, ConfigError, Error, Event, Status, minimize, minimize_unobserved,
};

fn objective(text: &str) -> Objective<Expr> {
    let function: Expr = text.parse().expect("valid expression");
    Objective::new(function, ["x", "y"]).expect("two variables")
}

#[test]
fn bowl_converges_to_origin() {
    let bowl = objective("x^2 + y^2");
    let config = Config::new(1e-6, 1000).unwrap();

    let trace = minimize_unobserved(&bowl, Point::new(1.0, 1.0), &config)
        .expect("bowl is defined everywhere");

    assert_eq!(trace.status(), Status::Converged);
    assert!(trace.len() >= 2);
    assert_eq!(trace.points()[0], Point::new(1.0, 1.0));

    let last = trace.minimizer().unwrap();
    assert!(last.distance(Point::new(0.0, 0.0)) < 1e-5);
    assert_abs_diff_eq!(bowl.value(last).unwrap(), 0.0, epsilon = 1e-5);
}

#[test]
fn trace_length_counts_iterations() {
    let bowl = objective("x^2 + y^2");

    let trace = minimize_unobserved(&bowl, Point::new(-3.0, 2.0), &Config::default()).unwrap();

    assert_eq!(trace.len(), trace.iters() + 1);

    let mut visited = 0;
    for _ in &trace {
        visited += 1;
    }
    assert_eq!(visited, trace.len());
}

#[test]
fn start_at_minimum_converges_in_one_step() {
    let bowl = objective("x^2 + y^2");

    let trace = minimize_unobserved(&bowl, Point::new(0.0, 0.0), &Config::default()).unwrap();

    assert_eq!(trace.status(), Status::Converged);
    assert_eq!(trace.iters(), 1);
    assert_eq!(trace.into_points(), vec![Point::new(0.0, 0.0); 2]);
}

#[test]
fn elongated_bowl_zigzags_to_minimum() {
    // Minimum at (1, 0).
    let bowl = objective("x^2 + 4y^2 - 2x");

    let trace = minimize_unobserved(&bowl, Point::new(-1.0, 1.0), &Config::default()).unwrap();

    assert_eq!(trace.status(), Status::Converged);
    assert!(trace.iters() > 2);
    let last = trace.minimizer().unwrap();
    assert!(last.distance(Point::new(1.0, 0.0)) < 1e-5);
}

#[test]
fn division_by_zero_is_forbidden() {
    let ratio = objective("x/y");

    let result = minimize_unobserved(&ratio, Point::new(1.0, 0.0), &Config::default());

    let Err(Error::ForbiddenOperation(error)) = result else {
        panic!("expected a forbidden operation, got {result:?}");
    };
    assert_eq!(error.point, Point::new(1.0, 0.0));
}

#[test]
fn unbounded_function_diverges() {
    let slope = objective("x^2 + y");

    let trace = minimize_unobserved(&slope, Point::new(1.0, 1.0), &Config::default()).unwrap();

    assert!(trace.is_empty());
    assert!(trace.is_diverged());
    assert_eq!(trace.minimizer(), None);
    assert_eq!(trace.iters(), 1001);
}

#[test]
fn iteration_cap_allows_one_extra_iteration() {
    let slope = objective("x^2 + y");
    let config = Config::new(1e-6, 3).unwrap();

    let mut steps = Vec::new();
    let observer = |event: &Event<'_>| {
        if let Event::Stepped { iter, .. } = event {
            steps.push(*iter);
        }
        None
    };

    let trace = minimize(&slope, Point::new(1.0, 1.0), &config, observer).unwrap();

    assert_eq!(steps, vec![1, 2, 3, 4]);
    assert_eq!(trace.status(), Status::Diverged);
    assert_eq!(trace.iters(), 4);
}

#[test]
fn stepped_events_describe_each_move() {
    let bowl = objective("x^2 + y^2");
    let start = Point::new(1.0, 1.0);

    let mut moves = Vec::new();
    let observer = |event: &Event<'_>| {
        if let Event::Stepped {
            from,
            to,
            gradient,
            step,
            ..
        } = event
        {
            moves.push((*from, *to, *gradient, *step));
        }
        None
    };

    let trace = minimize(&bowl, start, &Config::default(), observer).unwrap();

    assert_eq!(moves.len(), trace.iters());
    let (from, to, gradient, step) = moves[0];
    assert_eq!(from, start);
    assert_eq!(gradient.0, [2.0, 2.0]);
    assert_abs_diff_eq!(step, 0.5, epsilon = 1e-3);
    assert_eq!(to, trace.points()[1]);
}

#[test]
fn observer_can_stop_early() {
    let slope = objective("x^2 + y");

    let observer = |event: &Event<'_>| match event {
        Event::Stepped { iter: 2, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let trace = minimize(&slope, Point::new(1.0, 1.0), &Config::default(), observer).unwrap();

    assert_eq!(trace.status(), Status::StoppedByObserver);
    assert_eq!(trace.iters(), 2);
    assert_eq!(trace.len(), 3);
}

#[test]
fn convergence_outranks_stop_request() {
    let bowl = objective("x^2 + y^2");
    let always_stop = |_event: &Event<'_>| Some(Action::StopEarly);

    let trace = minimize(&bowl, Point::new(0.0, 0.0), &Config::default(), always_stop).unwrap();

    assert_eq!(trace.status(), Status::Converged);
    assert_eq!(trace.iters(), 1);
    assert_eq!(trace.len(), 2);
}

#[test]
fn observer_sees_failures() {
    let ratio = objective("x/y");
    let start = Point::new(1.0, 0.0);

    let mut failures = 0;
    let observer = |event: &Event<'_>| {
        if let Event::Failed { point, error, .. } = event {
            assert_eq!(*point, start);
            assert_eq!(error.point, start);
            failures += 1;
        }
        None
    };

    let result = minimize(&ratio, start, &Config::default(), observer);

    assert!(matches!(result, Err(Error::ForbiddenOperation(_))));
    assert_eq!(failures, 1);
}

#[test]
fn observer_can_recover_failed_run() {
    let ratio = objective("x/y");
    let start = Point::new(1.0, 0.0);

    let observer = |event: &Event<'_>| match event {
        Event::Failed { .. } => Some(Action::StopEarly),
        Event::Stepped { .. } => None,
    };

    let trace = minimize(&ratio, start, &Config::default(), observer).unwrap();

    assert_eq!(trace.status(), Status::StoppedByObserver);
    assert_eq!(trace.points(), &[start]);
}

#[test]
fn config_defaults_and_validation() {
    let config = Config::default();
    assert_abs_diff_eq!(config.tolerance(), 1e-6);
    assert_eq!(config.max_iters(), 1000);
    assert_eq!(config.line_search(), &golden_section::Config::default());

    assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
    assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));

    let fine = golden_section::Config::new(1e-9).unwrap();
    assert_eq!(config.with_line_search(fine).line_search(), &fine);
}

fn bowl_converges_from(x: i16, y: i16) -> TestResult {
    let start = Point::new(f64::from(x) / 100.0, f64::from(y) / 100.0);
    let config = Config::new(1e-6, 1000).expect("positive tolerance");

    match minimize_unobserved(&objective("x^2 + y^2"), start, &config) {
        Ok(trace) => {
            let converged = trace.status() == Status::Converged;
            let near_origin = trace
                .minimizer()
                .is_some_and(|last| last.x.abs() < 1e-5 && last.y.abs() < 1e-5);
            TestResult::from_bool(converged && near_origin)
        }
        Err(_) => TestResult::failed(),
    }
}

quickcheck! {
    /// The bowl converges to the origin from any start point.
    fn prop_bowl_converges(x: i16, y: i16) -> TestResult {
        bowl_converges_from(x, y)
    }
}
