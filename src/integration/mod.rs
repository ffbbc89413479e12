//! # Integration tests for the `fib-bench` binary.
//! The tests in this module exercise the benchmark end to end: the compiled
//! binary is spawned with no arguments, exactly as a user would run it, and
//! its output is checked line by line.
//!
//! ## Test Plan
//!
//! + [x] The benchmark exits successfully.
//! + [x] Standard output carries exactly two lines.
//! + [x] The result line reports `fib(40)` correctly.
//! + [x] The timing line reports a non-negative millisecond count.

mod benchmark;

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

/// Spawns the compiled benchmark binary and collects its output.
fn run_benchmark() -> Output {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_fib-bench"));
    assert!(
        binary.exists(),
        "\nTest setup couldn't find the benchmark executable.
    Please ensure that `fib-bench` is built before running integration tests.
    [Expected to find the binary at: {:?}]\n",
        binary
    );

    Command::new(binary).output().unwrap()
}
