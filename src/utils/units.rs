//! Time unit formatting for durations and sample rates
//!
//! Durations are carried in microseconds throughout the analysis and only
//! scaled to a readable unit when printed.

/// Microseconds per second
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Microseconds per millisecond
const MICROS_PER_MILLI: f64 = 1_000.0;

/// Format a microsecond duration in the smallest readable unit
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::units::format_duration_us;
///
/// assert_eq!(format_duration_us(8.68), "8.7us");
/// assert_eq!(format_duration_us(1_500.0), "1.50ms");
/// assert_eq!(format_duration_us(2_500_000.0), "2.500s");
/// ```
pub fn format_duration_us(us: f64) -> String {
    if us < MICROS_PER_MILLI {
        format!("{:.1}us", us)
    } else if us < MICROS_PER_SECOND {
        format!("{:.2}ms", us / MICROS_PER_MILLI)
    } else {
        format!("{:.3}s", us / MICROS_PER_SECOND)
    }
}

/// Format a duration range with both bounds in the unit chosen by the upper bound
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::units::format_duration_range_us;
///
/// assert_eq!(format_duration_range_us(5.0, 29.8), "    5.0-   29.8us");
/// assert_eq!(format_duration_range_us(900.0, 1_200.0), "   0.90-   1.20ms");
/// ```
pub fn format_duration_range_us(left_us: f64, right_us: f64) -> String {
    if right_us < MICROS_PER_MILLI {
        format!("{:7.1}-{:7.1}us", left_us, right_us)
    } else if right_us < MICROS_PER_SECOND {
        format!(
            "{:7.2}-{:7.2}ms",
            left_us / MICROS_PER_MILLI,
            right_us / MICROS_PER_MILLI
        )
    } else {
        format!(
            "{:7.3}-{:7.3}s",
            left_us / MICROS_PER_SECOND,
            right_us / MICROS_PER_SECOND
        )
    }
}

/// Format a sample rate in MHz
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::units::format_sample_rate;
///
/// assert_eq!(format_sample_rate(12_500_000.0), "12.5 MHz");
/// ```
pub fn format_sample_rate(hz: f64) -> String {
    format!("{:.1} MHz", hz / 1e6)
}
