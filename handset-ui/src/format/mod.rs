//! Field formatting
//!
//! Turns clock, battery and frequency values into display strings. Every
//! field has a fixed character bound; values that would not fit are cut at
//! the bound, never written past it.

pub mod writer;

use heapless::String;

use crate::traits::CurTime;

pub use writer::{bounded, Truncating};

/// Clock field bound (`"HH:MM"`)
pub const CLOCK_LEN: usize = 5;

/// Battery field bound (`"N.NV "`)
pub const BATTERY_LEN: usize = 5;

/// Frequency field bound (label plus value)
pub const FREQ_LEN: usize = 19;

/// Label in front of a frequency value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FreqLabel {
    Rx,
    Tx,
}

impl FreqLabel {
    /// Four-character prefix, including the trailing space
    pub const fn prefix(self) -> &'static str {
        match self {
            FreqLabel::Rx => "Rx: ",
            FreqLabel::Tx => "Tx: ",
        }
    }
}

/// Format the time of day
///
/// Hour and minute each take a two-character slot padded with spaces, not
/// zeros: 9:05 renders as `" 9: 5"`.
pub fn clock(time: CurTime) -> String<CLOCK_LEN> {
    bounded(format_args!("{:2}:{:2}", time.hour, time.minute))
}

/// Format the battery voltage with one decimal, e.g. `"4.1V "`
///
/// A sensor sentinel of NaN or infinity renders as `"nanV "` / `"infV "`.
pub fn battery(volts: f32) -> String<BATTERY_LEN> {
    match non_finite(volts) {
        Some(word) => bounded(format_args!("{}V ", word)),
        None => bounded(format_args!("{:.1}V ", volts)),
    }
}

/// Format a frequency in MHz, e.g. `"Rx: 146.52000"`
///
/// The value is zero-padded to nine characters with five decimals.
/// NaN and infinities are space-padded instead: `"Rx:       nan"`.
pub fn frequency(label: FreqLabel, mhz: f32) -> String<FREQ_LEN> {
    match non_finite(mhz) {
        Some(word) => bounded(format_args!("{}{:>9}", label.prefix(), word)),
        None => bounded(format_args!("{}{:09.5}", label.prefix(), mhz)),
    }
}

/// Lowercase spelling of a non-finite value, `None` for finite ones
///
/// `{:09}` would zero-pad these and spell NaN as `NaN`.
fn non_finite(value: f32) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f32::INFINITY {
        Some("inf")
    } else if value == f32::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}
