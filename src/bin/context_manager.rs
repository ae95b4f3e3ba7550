//! Enter a scope, divide by zero inside it, and let the fault go unhandled.
//!
//! Run with: cargo run --bin context_manager

use scoped_match_demos::config::{init_logging, DemoConfig};
use scoped_match_demos::scope::run_block;
use scoped_match_demos::{scoped, Announcer};
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

    let mut cmc = Announcer::new(io::stdout());
    let result = scoped(&mut cmc, |value| run_block(value, &mut io::stdout()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(fault) => {
            eprint!("{}", fault.report());
            ExitCode::FAILURE
        }
    }
}
