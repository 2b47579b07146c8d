//! Device profile
//!
//! The profile names the panel size and the colors used on the main
//! screen. It is checked once at startup; an unsupported panel aborts
//! initialization instead of drawing with an undefined layout.
//!
//! With the `serde` feature the profile can be stored in flash as postcard
//! binary data.

use crate::layout::DisplayGeometry;
use crate::traits::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current profile format version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum serialized profile size (binary)
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No layout exists for this panel size
    UnsupportedGeometry { width: u16, height: u16 },
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Stored profile has a different format version
    VersionMismatch,
}

/// Colors used for the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Theme {
    /// Text color
    pub foreground: Color,
    /// Screen clear color, applied by the rasterizer backend
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

/// Device profile for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Profile format version
    pub version: u8,
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// Screen colors
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(160, 128)
    }
}

impl UiConfig {
    /// Create a profile for a panel size with the default theme
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            version: CONFIG_VERSION,
            width,
            height,
            theme: Theme {
                foreground: Color::WHITE,
                background: Color::BLACK,
            },
        }
    }

    /// Replace the theme
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Resolve the panel geometry
    ///
    /// Fails for panel sizes without a layout.
    pub fn geometry(&self) -> Result<DisplayGeometry, ConfigError> {
        DisplayGeometry::new(self.width, self.height)
    }
}

#[cfg(feature = "serde")]
impl UiConfig {
    /// Serialize the profile into `buf`, returning the used part
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Load a profile from postcard bytes
    ///
    /// The version and panel size are checked before the profile is
    /// returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: UiConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        config.geometry()?;

        Ok(config)
    }
}
