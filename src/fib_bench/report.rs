use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use fib_bench_lib::constants::BENCH_INPUT;
use fib_bench_lib::ctx;
use fib_bench_lib::measurement::Measurement;

/// Writes the two-line benchmark report to `out`.
///
/// The first line carries the computed value, the second the elapsed
/// wall-clock time in milliseconds. Nothing else is written, so the
/// output of the binary stays machine-checkable.
pub fn print_measurement(out: &mut impl Write, measurement: &Measurement) -> Result<()> {
    writeln!(out, "fib({}): {}", BENCH_INPUT, measurement.result).with_context(ctx!(
        "Could not write the result line", ;
        "Ensure that standard output is writable",
    ))?;

    writeln!(
        out,
        "Took {:.3} milliseconds to execute",
        measurement.wall_millis()
    )
    .with_context(ctx!(
        "Could not write the timing line", ;
        "Ensure that standard output is writable",
    ))?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
