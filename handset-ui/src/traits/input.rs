//! Keypad state as delivered by the key decoder

/// Set of pressed keys, one bit per key
///
/// The main screen does not react to keys yet; the mask is carried through
/// `Ui::update` so interactive regions can be added without changing the
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMask(pub u32);

impl KeyMask {
    /// No keys pressed
    pub const NONE: KeyMask = KeyMask(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every key in `other` is pressed
    pub const fn contains(self, other: KeyMask) -> bool {
        self.0 & other.0 == other.0
    }
}
