use approx::assert_abs_diff_eq;
use steepest_app::{AppError, Input, run};
use steepest_solvers::steepest_descent::Status;

fn calculate(input: &Input) -> Result<String, AppError> {
    let request = input.parse()?;
    run(&request).map(|report| report.to_string())
}

fn message(input: &Input) -> String {
    calculate(input).unwrap_or_else(|error| error.to_string())
}

#[test]
fn correct_input() {
    let input = Input::new("x^2+y^2", "1", "1");

    assert_eq!(
        message(&input),
        "f(x*, y*) = 0.00000; x* = 0.00000; y* = 0.00000; "
    );
}

#[test]
fn forbidden_operation() {
    let input = Input::new("x/y", "1", "0");

    assert!(matches!(calculate(&input), Err(AppError::ForbiddenOperation(_))));
    assert_eq!(message(&input), "ERROR: forbidden operation");
}

#[test]
fn divergence() {
    let input = Input::new("x^2 + y", "1", "1");

    assert!(matches!(calculate(&input), Err(AppError::Divergence)));
    assert_eq!(
        message(&input),
        "ERROR: too many iterations, method may diverge"
    );
}

#[test]
fn missing_args() {
    let input = Input::new("x^2 + z^2", "1", "1");

    assert_eq!(message(&input), "ERROR: some arguments missing");
}

#[test]
fn incorrect_function() {
    let input = Input::new("+", "1", "1");

    assert_eq!(message(&input), "ERROR: incorrect function input");
}

#[test]
fn incorrect_dimension() {
    let input = Input::new("x^2 + 2^8", "1", "1");

    assert_eq!(
        message(&input),
        "ERROR: incorrect function dimension, consider using function of 2 variables"
    );
}

#[test]
fn incorrect_start() {
    let input = Input::new("x^2 + y^2", "1", "a");

    assert_eq!(message(&input), "ERROR: incorrect start point input");
}

#[test]
fn incorrect_tolerance() {
    let input = Input::new("x^2 + y^2", "1", "a").with_tolerance("aaa");

    assert_eq!(message(&input), "ERROR: incorrect tolerance input");
}

#[test]
fn shifted_bowl_report() {
    let input = Input::new("(x - 1)^2 + 4(y + 2)^2 + 3", "0", "0");

    let report = run(&input.parse().unwrap()).unwrap();

    assert_eq!(report.trace().status(), Status::Converged);
    assert_abs_diff_eq!(report.minimizer().x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(report.minimizer().y, -2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(report.value(), 3.0, epsilon = 1e-9);
    assert_eq!(
        report.to_string(),
        "f(x*, y*) = 3.00000; x* = 1.00000; y* = -2.00000; "
    );
}

#[test]
fn comma_decimal_start() {
    let input = Input::new("x^2 + y^2", "0,5", "-0,25");

    let report = run(&input.parse().unwrap()).unwrap();

    assert_eq!(report.trace().points()[0].x, 0.5);
    assert_eq!(report.trace().points()[0].y, -0.25);
}

#[test]
fn deeply_nested_function() {
    let parens = format!("{}x + y{}", "(".repeat(5000), ")".repeat(5000));
    let signs = format!("{}x + y", "-".repeat(5000));

    for function in [parens, signs] {
        let input = Input::new(function, "1", "1");
        assert!(matches!(input.parse(), Err(AppError::IncorrectFunction(_))));
        assert_eq!(message(&input), "ERROR: incorrect function input");
    }
}
