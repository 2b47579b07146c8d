//! Rasterizer trait and drawing primitives

/// Pixel coordinate on the display
///
/// `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Font sizes offered by the rasterizer, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// Status bar text (8 pt class)
    Size1,
    Size2,
    /// Main row text on large panels (16 pt class)
    Size3,
    Size4,
}

/// Horizontal text anchoring
///
/// Alignment is relative to the span between the print point's `x` and
/// the right edge of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Pixel-level drawing backend
///
/// Implementations own the framebuffer and font rendering. Text that does
/// not fit on the display must be clipped by the implementation. Drawing is
/// infallible at this level; a backend that can fail decides on its own
/// how to report it.
pub trait Rasterizer {
    /// Clear the whole screen to the background color
    fn clear_screen(&mut self);

    /// Draw `text` anchored at `point`
    fn print(&mut self, point: Point, text: &str, size: FontSize, align: TextAlign, color: Color);
}

/// A formatted string together with its placement
///
/// Built right before printing and dropped right after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField<'a> {
    pub text: &'a str,
    pub point: Point,
    pub size: FontSize,
    pub align: TextAlign,
}

impl<'a> TextField<'a> {
    pub const fn new(text: &'a str, point: Point, size: FontSize, align: TextAlign) -> Self {
        Self {
            text,
            point,
            size,
            align,
        }
    }

    /// Hand the field over to the rasterizer
    pub fn print<R: Rasterizer + ?Sized>(&self, rasterizer: &mut R, color: Color) {
        rasterizer.print(self.point, self.text, self.size, self.align, color);
    }
}
