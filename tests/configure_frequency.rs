//! Literal scenarios for the reference two-stage cascade: a 16 MHz bus clock
//! into divisors {1, 2, 4, 8, 16} then {1, 2, 3, 4, 5}.

use clock_divider::{Error, configure_frequency};

#[test]
fn bus_clock_without_changes() {
    assert_eq!(configure_frequency(16_000_000).unwrap(), [1, 1]);
}

#[test]
fn bus_clock_divided_by_two() {
    assert_eq!(configure_frequency(8_000_000).unwrap(), [2, 1]);
}

#[test]
fn bus_clock_divided_by_the_last_divider() {
    assert_eq!(configure_frequency(1_000_000).unwrap(), [5, 1]);
}

#[test]
fn bus_clock_divided_by_second_level() {
    // 16 MHz / (4 * 3) ~= 1.333 MHz is the closest reach to 1.33 MHz.
    assert_eq!(configure_frequency(1_330_000).unwrap(), [3, 3]);
}

#[test]
fn bus_clock_divided_to_smallest_value() {
    // Maximum combined reduction: 16 MHz / (16 * 5) = 200 kHz.
    assert_eq!(configure_frequency(200_000).unwrap(), [5, 5]);
}

#[test]
fn near_match_when_no_exact_combination_exists() {
    // No divisor product gives 1.35 MHz; the best the target supports is a
    // product of 10, ie 16 MHz / (2 * 5) = 1.6 MHz.
    assert_eq!(configure_frequency(1_350_000).unwrap(), [2, 5]);
}

#[test]
fn zero_frequency_is_invalid() {
    assert_eq!(configure_frequency(0), Err(Error::InvalidFrequency));
}

#[test]
fn target_above_bus_clock_falls_back_to_slowest_output() {
    assert_eq!(configure_frequency(20_000_000).unwrap(), [5, 5]);
}
