/// Asserts the detected cycle's start and period.
#[macro_export]
macro_rules! assert_cycle {
    ($result:expr, $start:expr, $period:expr) => {
        assert!($result.cycle.found, "Expected a cycle, none found");
        assert_eq!(
            ($result.cycle.start_index, $result.cycle.period),
            ($start, $period),
            "Cycle (start, period) mismatch"
        );
    };
}

/// Asserts the full trajectory of sentence `$i`.
#[macro_export]
macro_rules! assert_column {
    ($result:expr, $i:expr, $expected:expr) => {
        let actual = common::column(&$result, $i);
        let expected: Vec<bool> = $expected.to_vec();
        assert_eq!(actual, expected, "Trajectory of sentence {} mismatch", $i);
    };
}

/// Asserts two floats are within `$eps`.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr, $eps:expr) => {
        let (a, e): (f64, f64) = ($actual, $expected);
        assert!(
            (a - e).abs() <= $eps,
            "{} is not within {} of {}",
            a,
            $eps,
            e
        );
    };
}
