//! Collaborator traits
//!
//! These traits define the interface between the screen composition logic
//! and the pixel rasterizer, real-time clock, battery sensor and keypad.

pub mod input;
pub mod rasterizer;
pub mod sources;

pub use input::KeyMask;
pub use rasterizer::{Color, FontSize, Point, Rasterizer, TextAlign, TextField};
pub use sources::{ClockSource, CurTime, PowerSensor};
