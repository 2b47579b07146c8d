//! embedded-graphics backend for the handset UI
//!
//! This crate provides:
//! - `EgRasterizer`, a `handset_ui::Rasterizer` for any embedded-graphics
//!   `DrawTarget` (SPI TFT drivers, LCD framebuffers, simulators)
//! - Font and color mapping from the UI's abstract sizes to mono fonts
//!
//! # Architecture
//!
//! The UI core decides what goes where; this crate only turns print
//! requests into pixels. Panel drivers stay outside: anything implementing
//! `DrawTarget` with a color convertible from `Rgb888` can be wrapped.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod fonts;

// Re-export key types
pub use backend::EgRasterizer;
pub use fonts::{font_for, to_alignment, to_color};
