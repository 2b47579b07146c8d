//! Radio state snapshot supplied by the caller each frame

/// Values shown on the main screen
///
/// The caller owns the snapshot and passes a fresh one to every
/// `Ui::update`; the UI never keeps it past the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioState {
    /// Receive frequency in MHz
    pub rx_freq: f32,
    /// Transmit frequency in MHz
    pub tx_freq: f32,
}

impl RadioState {
    pub const fn new(rx_freq: f32, tx_freq: f32) -> Self {
        Self { rx_freq, tx_freq }
    }

    /// Simplex channel: same frequency both ways
    pub const fn simplex(freq: f32) -> Self {
        Self::new(freq, freq)
    }
}
