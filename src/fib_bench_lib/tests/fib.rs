use crate::fib::fibonacci;

/// An iterative reference implementation used to cross-check the
/// recursive one on small inputs.
fn fibonacci_iterative(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => {
            let mut a: u64 = 0;
            let mut b: u64 = 1;
            for _ in 2..=n {
                let c = a + b;
                a = b;
                b = c;
            }
            b
        }
    }
}

/// The base cases of the recurrence.
#[test]
fn base_cases() {
    assert_eq!(fibonacci(0), 0);
    assert_eq!(fibonacci(1), 1);
    assert_eq!(fibonacci(2), 1);
}

/// A handful of well-known values further up the sequence.
#[test]
fn known_values() {
    assert_eq!(fibonacci(10), 55);
    assert_eq!(fibonacci(20), 6765);
    assert_eq!(fibonacci(30), 832_040);
}

/// The exact value for the benchmark input.
///
/// This runs the full exponential recursion, so it is by far the slowest
/// unit test in the crate.
#[test]
fn benchmark_input_value() {
    assert_eq!(fibonacci(40), 102_334_155);
}

/// The recursive implementation agrees with the iterative reference.
#[test]
fn matches_iterative_reference() {
    for n in 0..=25 {
        assert_eq!(fibonacci(n), fibonacci_iterative(n), "disagreement at n = {n}");
    }
}

/// The defining recurrence holds for all small inputs.
#[test]
fn recurrence_holds() {
    for n in 2..=20 {
        assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
    }
}

/// The sequence never decreases.
#[test]
fn monotonic() {
    for n in 0..=24 {
        assert!(fibonacci(n + 1) >= fibonacci(n));
    }
}
