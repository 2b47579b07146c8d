//! Font and color mapping

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_7X13, FONT_9X18};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::Alignment;
use handset_ui::{Color, FontSize, TextAlign};

/// Mono font used for each UI font size
///
/// `Size1` fits an 8 px status bar; `Size3` fills a 32 px row with 8 px of
/// padding above.
pub fn font_for(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Size1 => &FONT_5X8,
        FontSize::Size2 => &FONT_7X13,
        FontSize::Size3 => &FONT_9X18,
        FontSize::Size4 => &FONT_10X20,
    }
}

pub fn to_alignment(align: TextAlign) -> Alignment {
    match align {
        TextAlign::Left => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::Right => Alignment::Right,
    }
}

/// Convert a UI color to the target's pixel color
pub fn to_color<C: From<Rgb888>>(color: Color) -> C {
    C::from(Rgb888::new(color.r, color.g, color.b))
}
