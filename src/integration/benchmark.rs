use crate::run_benchmark;

/// A full run of the benchmark: clean exit, two lines of output, the
/// correct result, and a sensible elapsed time.
///
/// All properties are checked against a single spawn because every run
/// performs the full exponential recursion.
#[test]
fn benchmark_end_to_end() {
    let output = run_benchmark();

    assert!(
        output.status.success(),
        "the benchmark did not exit cleanly: {:?}",
        output.status
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines.len(),
        2,
        "expected exactly two output lines, got: {stdout:?}"
    );

    assert!(
        lines[0].contains("102334155"),
        "unexpected result line: {}",
        lines[0]
    );

    let millis: f64 = lines[1]
        .split_whitespace()
        .find_map(|token| token.parse().ok())
        .expect("no numeric millisecond value on the timing line");

    assert!(millis >= 0.0, "negative elapsed time: {millis}");
}
