//! Supported display geometries

use crate::config::ConfigError;

use super::policy::{region_layout, RegionLayout};

/// Panel resolutions the layout policy knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// 160x128 color TFT (MD380 class)
    R160x128,
    /// 128x64 monochrome LCD (GD77 class)
    R128x64,
}

impl Resolution {
    /// Every supported resolution
    pub const ALL: [Resolution; 2] = [Resolution::R160x128, Resolution::R128x64];

    /// Look up the resolution class for a panel size
    pub fn from_size(width: u16, height: u16) -> Result<Self, ConfigError> {
        match (width, height) {
            (160, 128) => Ok(Resolution::R160x128),
            (128, 64) => Ok(Resolution::R128x64),
            _ => Err(ConfigError::UnsupportedGeometry { width, height }),
        }
    }

    /// Panel width in pixels
    pub const fn width(self) -> u16 {
        match self {
            Resolution::R160x128 => 160,
            Resolution::R128x64 => 128,
        }
    }

    /// Panel height in pixels
    pub const fn height(self) -> u16 {
        match self {
            Resolution::R160x128 => 128,
            Resolution::R128x64 => 64,
        }
    }
}

/// Physical display profile
///
/// Built once at startup and never changed afterwards. Holds the derived
/// region layout so composing a frame needs no further lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    resolution: Resolution,
    layout: RegionLayout,
}

impl DisplayGeometry {
    /// Create the geometry for a panel of `width` x `height` pixels
    ///
    /// Fails with [`ConfigError::UnsupportedGeometry`] when no layout exists
    /// for the size.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        Resolution::from_size(width, height).map(Self::from_resolution)
    }

    /// Create the geometry for a known resolution class
    pub fn from_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            layout: region_layout(resolution),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u16 {
        self.resolution.width()
    }

    pub fn height(&self) -> u16 {
        self.resolution.height()
    }

    pub fn layout(&self) -> &RegionLayout {
        &self.layout
    }
}
