use std::time::Duration;
use std::time::Instant;

/// This structure contains the measurements for one run of the benchmark.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Interval of wall time.
    pub wall_micros: Duration,

    /// The value computed within the measured interval.
    pub result: u64,
}

impl Measurement {
    /// The measured wall time expressed in milliseconds.
    pub fn wall_millis(&self) -> f64 {
        self.wall_micros.as_secs_f64() * 1000.0
    }
}

/// This is an extensible structure for measuring monotonic metrics.
pub struct Clock {
    /// The instant at which the measurement started.
    wall_time: Instant,
}

/// Start the measurement, returns a new instance of a [Clock].
pub fn start_measuring() -> Clock {
    Clock {
        wall_time: Instant::now(),
    }
}

/// Stop a measurement, returns a new instance of a [Measurement].
pub fn stop_measuring(clk: Clock, result: u64) -> Measurement {
    Measurement {
        wall_micros: clk.wall_time.elapsed(),
        result,
    }
}

#[cfg(test)]
#[path = "tests/measurement.rs"]
mod tests;
