//! Rule-based protocol inference from aggregate timing
//!
//! Two independent timing signatures are checked:
//!
//! - **UART** - every gap is close to a whole number of bit periods for one of
//!   the standard baud rates, and the shortest gap is about one bit long
//! - **1-Wire** - long low reset pulses (~480us) next to very short data slots
//!
//! Guesses from different rules are never suppressed against each other.

use crate::types::{DurationStats, ProtocolGuess, ProtocolKind, PulseDurations};
use crate::utils::math::safe_mean;
use crate::utils::units::MICROS_PER_SECOND;
use tracing::debug;

/// Standard UART baud rates - single source of truth
pub const COMMON_BAUD_RATES: &[u32] = &[
    300, 1_200, 2_400, 4_800, 9_600, 19_200, 38_400, 57_600, 115_200, 230_400, 460_800, 921_600,
];

/// Shortest gap must lie within (0.7, 1.3) bit periods
const UART_MIN_RATIO_RANGE: (f64, f64) = (0.7, 1.3);

/// Mean distance from a whole bit count must stay below this
const UART_MAX_ALIGNMENT_ERROR: f64 = 0.15;

const UART_BASE_CONFIDENCE: f64 = 0.9;
const UART_ERROR_PENALTY: f64 = 3.0;
const UART_MIN_CONFIDENCE: f64 = 0.3;

/// Gaps shorter than this count as 1-Wire data slots (µs)
const ONE_WIRE_SHORT_PULSE_US: f64 = 20.0;

/// Longest gap must exceed this for a reset pulse to be possible (µs)
const ONE_WIRE_LONG_PULSE_US: f64 = 400.0;

/// Exclusive window for a low reset pulse (µs)
const ONE_WIRE_RESET_RANGE_US: (f64, f64) = (400.0, 600.0);

const ONE_WIRE_CONFIDENCE: f64 = 0.6;

/// Theoretical bit period in microseconds
///
/// # Examples
/// ```
/// use logic_capture_analyser::analysis::protocol_guesser::bit_period_us;
///
/// assert!((bit_period_us(9600) - 104.1667).abs() < 1e-3);
/// ```
pub fn bit_period_us(baud_rate: u32) -> f64 {
    MICROS_PER_SECOND / baud_rate as f64
}

/// Protocol guessing engine
pub struct ProtocolGuesser;

impl ProtocolGuesser {
    /// Run every rule and rank the results
    ///
    /// Guesses are ordered by confidence, highest first; equal confidences keep
    /// rule order (UART rates ascending, then 1-Wire). An empty result is a
    /// valid outcome.
    pub fn guess(all_stats: &DurationStats, durations: &PulseDurations) -> Vec<ProtocolGuess> {
        let mut guesses = Self::uart_guesses(all_stats, &durations.all);
        guesses.extend(Self::one_wire_guess(all_stats, durations));

        // Stable: ties keep emission order
        guesses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        guesses
    }

    /// UART bit-period matching, one guess per matching baud rate
    pub fn uart_guesses(all_stats: &DurationStats, all: &[f64]) -> Vec<ProtocolGuess> {
        if all.is_empty() {
            return Vec::new();
        }

        let (low_ratio, high_ratio) = UART_MIN_RATIO_RANGE;
        let mut guesses = Vec::new();

        for &baud_rate in COMMON_BAUD_RATES {
            let period = bit_period_us(baud_rate);
            let ratio = all_stats.min_us / period;
            if !(low_ratio < ratio && ratio < high_ratio) {
                continue;
            }

            let error = Self::bit_alignment_error(all, period);
            debug!(
                "UART candidate {} baud: min/period={:.3}, alignment error={:.4}",
                baud_rate, ratio, error
            );

            if error < UART_MAX_ALIGNMENT_ERROR {
                let confidence =
                    (UART_BASE_CONFIDENCE - UART_ERROR_PENALTY * error).max(UART_MIN_CONFIDENCE);
                guesses.push(ProtocolGuess::new(
                    ProtocolKind::Uart { baud_rate },
                    confidence,
                    format!("Bit period ~{:.1}us", period),
                ));
            }
        }

        guesses
    }

    /// Mean distance of each gap from the nearest whole number of bit periods
    pub fn bit_alignment_error(durations: &[f64], period_us: f64) -> f64 {
        let errors: Vec<f64> = durations
            .iter()
            .map(|d| {
                let bits = d / period_us;
                (bits - bits.round()).abs()
            })
            .collect();
        safe_mean(&errors)
    }

    /// 1-Wire reset/data pulse matching
    pub fn one_wire_guess(
        all_stats: &DurationStats,
        durations: &PulseDurations,
    ) -> Option<ProtocolGuess> {
        if !(all_stats.min_us < ONE_WIRE_SHORT_PULSE_US && all_stats.max_us > ONE_WIRE_LONG_PULSE_US)
        {
            return None;
        }

        let (reset_low, reset_high) = ONE_WIRE_RESET_RANGE_US;
        let has_reset = durations
            .low
            .iter()
            .any(|&d| reset_low < d && d < reset_high);
        let has_short = durations.all.iter().any(|&d| d < ONE_WIRE_SHORT_PULSE_US);

        debug!("1-Wire candidate: reset pulse={}, short pulse={}", has_reset, has_short);

        (has_reset && has_short).then(|| {
            ProtocolGuess::new(
                ProtocolKind::OneWire,
                ONE_WIRE_CONFIDENCE,
                "Detected reset pulses and short data pulses",
            )
        })
    }
}
