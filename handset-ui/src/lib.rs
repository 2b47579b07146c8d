//! Board-agnostic main-screen UI for handheld radios
//!
//! The screen is split into horizontal rows whose height depends on the
//! vertical resolution of the panel:
//!
//! ```text
//!        160x128 display                    Recommended font size
//!      ┌─────────────────────────┐
//!      │  top status bar (16 px) │  Size1 with 4 px vertical padding
//!      ├─────────────────────────┤
//!      │      Line 1 (32 px)     │  Size3 with 8 px vertical padding
//!      │      Line 2 (32 px)     │  Size3 with 8 px vertical padding
//!      │      Line 3 (32 px)     │  Size3 with 8 px vertical padding
//!      ├─────────────────────────┤
//!      │bottom status bar (16 px)│  Size1 with 4 px vertical padding
//!      └─────────────────────────┘
//!
//!        128x64 display
//!      ┌─────────────────────────┐
//!      │  top status bar (8 px)  │  Size1 without vertical padding
//!      ├─────────────────────────┤
//!      │      Line 1 (16 px)     │
//!      │      Line 2 (16 px)     │
//!      │      Line 3 (16 px)     │
//!      ├─────────────────────────┤
//!      │ bottom status bar (8 px)│  Size1 without vertical padding
//!      └─────────────────────────┘
//! ```
//!
//! This crate contains:
//!
//! - Layout policy keyed by the supported resolutions
//! - Bounded field formatting for clock, battery and frequency values
//! - Region composition on top of an abstract rasterizer
//! - The frame driver with its init/update/terminate lifecycle
//! - Traits for the rasterizer, clock and power sensor collaborators
//! - Device profile configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod compose;
pub mod config;
pub mod driver;
pub mod format;
pub mod layout;
pub mod radio;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use compose::Composer;
pub use config::{ConfigError, Theme, UiConfig};
pub use driver::{Lifecycle, Ui, UiError};
pub use layout::{DisplayGeometry, RegionLayout, Resolution};
pub use radio::RadioState;
pub use traits::{
    ClockSource, Color, CurTime, FontSize, KeyMask, Point, PowerSensor, Rasterizer, TextAlign,
};
