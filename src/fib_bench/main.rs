//! This binary runs the naive Fibonacci computation and measures metrics.
//!
//! The benchmark takes no arguments: it computes `fibonacci(40)` once,
//! brackets the call with a monotonic clock, and prints the result and the
//! elapsed wall-clock milliseconds as two lines on standard output.

/// The logging tokens used by the logger.
mod logging;

/// Formatting of the two-line benchmark report.
mod report;

use std::io::stdout;
use std::process::exit;

use anyhow::Result;
use colog::default_builder;
use colog::formatter;
use fib_bench_lib::constants::BENCH_INPUT;
use fib_bench_lib::constants::ERROR_STYLE;
use fib_bench_lib::constants::PRIMARY_STYLE;
use fib_bench_lib::fib::fibonacci;
use fib_bench_lib::measurement::start_measuring;
use fib_bench_lib::measurement::stop_measuring;
use log::debug;
use log::info;
use log::LevelFilter;

use crate::logging::LogTokens;

/// The entrypoint of the benchmark.
fn main() {
    setup_logging();

    if let Err(e) = process() {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// Initializes the logger with the tokens defined in [LogTokens].
///
/// The filter is fixed at [LevelFilter::Info]; the benchmark takes no
/// verbosity flags.
fn setup_logging() {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));
    log_build.filter(None, LevelFilter::Info);
    log_build.init();
}

/// Runs the single timed computation and prints the report.
///
/// Logging and report formatting sit strictly outside the measured
/// interval, so the clock brackets only the recursive call itself.
fn process() -> Result<()> {
    info!("running {PRIMARY_STYLE}fibonacci({BENCH_INPUT}){PRIMARY_STYLE:#} once, timed");

    let clock = start_measuring();
    let result = fibonacci(BENCH_INPUT);
    let measurement = stop_measuring(clock, result);

    debug!("the measured interval was {:?}", measurement.wall_micros);

    report::print_measurement(&mut stdout().lock(), &measurement)
}
