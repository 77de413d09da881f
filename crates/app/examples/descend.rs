//! Minimizes a function of `x` and `y` typed on the command line.
//!
//! # Usage
//!
//! ```text
//! cargo run --example descend -- "x^2 + y^2" 1 1
//! cargo run --example descend -- "(x - 1)^2 + 4(y + 2)^2" 0 0 1e-8
//! cargo run --example descend -- "x/y" 1 0
//! ```
//!
//! Prints the result line followed by every visited point. Errors print the
//! user-facing message and exit with status 1.

use steepest_app::{Input, run};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(function), Some(x0), Some(y0)) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: descend <function> <x0> <y0> [tolerance]");
        std::process::exit(1);
    };
    let input = Input::new(function, x0, y0).with_tolerance(args.next().unwrap_or_default());

    let report = match input.parse().and_then(|request| run(&request)) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    println!("{report}");
    for (i, point) in report.trace().points().iter().enumerate() {
        println!("{i:>4}: ({:.8}, {:.8})", point.x, point.y);
    }
}
