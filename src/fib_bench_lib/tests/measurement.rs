use std::thread::sleep;
use std::time::Duration;

use crate::measurement::start_measuring;
use crate::measurement::stop_measuring;
use crate::measurement::Measurement;

/// The measured interval covers at least the time slept inside the bracket.
#[test]
fn clock_covers_slept_interval() {
    let clock = start_measuring();
    sleep(Duration::from_millis(20));
    let measurement = stop_measuring(clock, 0);

    assert!(measurement.wall_micros >= Duration::from_millis(20));
}

/// The computed value passes through the measurement unchanged.
#[test]
fn result_is_preserved() {
    let clock = start_measuring();
    let measurement = stop_measuring(clock, 102_334_155);

    assert_eq!(measurement.result, 102_334_155);
}

/// Millisecond conversion agrees with the stored duration.
#[test]
fn millis_matches_duration() {
    let measurement = Measurement {
        wall_micros: Duration::from_millis(1500),
        result: 0,
    };

    assert_eq!(measurement.wall_millis(), 1500.0);
}
