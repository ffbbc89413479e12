/// Computes the `n`-th Fibonacci number by direct recursion.
///
/// Every call above the base cases issues exactly two recursive calls and
/// nothing is cached, so the running time grows exponentially with `n`.
/// That is deliberate: the benchmark exercises raw call overhead and
/// integer arithmetic, not a clever algorithm.
pub fn fibonacci(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

#[cfg(test)]
#[path = "tests/fib.rs"]
mod tests;
