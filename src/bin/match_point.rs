//! Classify points with `match`, then show that a bare name pattern captures.
//!
//! Run with: cargo run --bin match_point

use scoped_match_demos::capture::rebind_by_capture;
use scoped_match_demos::config::{init_logging, DemoConfig};
use scoped_match_demos::{match_point, Subject};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match DemoConfig::builtin() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    for point in &config.points {
        match match_point(&Subject::from(point.pair())) {
            Ok(report) => println!("{}", report),
            Err(fault) => {
                eprint!("{}", fault.report());
                return ExitCode::FAILURE;
            }
        }
    }

    let stdout = io::stdout();
    if let Err(e) = rebind_by_capture(config.capture.a, config.capture.b, &mut stdout.lock()) {
        eprintln!("failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
