//! Clock and battery sensor traits

/// Wall-clock time as reported by the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl CurTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

/// Real-time clock source
///
/// Takes `&mut self` because RTC reads usually go over a bus.
pub trait ClockSource {
    /// Read the current time of day
    fn time(&mut self) -> CurTime;
}

/// Battery voltage sensor
pub trait PowerSensor {
    /// Read the battery voltage in volts
    ///
    /// Implementations that cannot read the battery return a sentinel
    /// (for example `0.0`) rather than failing.
    fn battery_voltage(&mut self) -> f32;
}
