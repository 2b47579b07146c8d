//! Rasterizer backend over an embedded-graphics draw target

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point as EgPoint;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text, TextStyleBuilder};
use handset_ui::{Color, FontSize, Point, Rasterizer, TextAlign, Theme};

use crate::fonts::{font_for, to_alignment, to_color};

/// `Rasterizer` that draws into an embedded-graphics `DrawTarget`
///
/// Text is placed with its top edge at the print point. Horizontal
/// alignment is resolved against the span from the point's `x` to the
/// right edge of the target, so a centered field at `x = 0` is centered on
/// the screen.
///
/// Draw errors from the target do not interrupt the frame. They are
/// counted and can be read back with [`EgRasterizer::draw_failures`].
pub struct EgRasterizer<D> {
    target: D,
    background: Color,
    draw_failures: u32,
}

impl<D> EgRasterizer<D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    /// Wrap a draw target; `clear_screen` fills it with `background`
    pub fn new(target: D, background: Color) -> Self {
        Self {
            target,
            background,
            draw_failures: 0,
        }
    }

    /// Wrap a draw target that clears to the theme's background
    ///
    /// Pass the theme of the `UiConfig` the `Ui` is built from so the
    /// cleared screen matches the stored profile.
    pub fn with_theme(target: D, theme: &Theme) -> Self {
        Self::new(target, theme.background)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutable access for flushing buffered panels after a frame
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    /// Number of draw calls the target rejected so far
    pub fn draw_failures(&self) -> u32 {
        self.draw_failures
    }

    /// Resolve the embedded-graphics anchor for a print point
    fn anchor(&self, point: Point, align: TextAlign) -> EgPoint {
        let bounds = self.target.bounding_box();
        let left = bounds.top_left.x + i32::from(point.x);
        let right = bounds.top_left.x + bounds.size.width as i32 - 1;
        let y = bounds.top_left.y + i32::from(point.y);

        let x = match align {
            TextAlign::Left => left,
            TextAlign::Center => left + (right + 1 - left) / 2,
            TextAlign::Right => right,
        };
        EgPoint::new(x, y)
    }

    fn check<T>(&mut self, result: Result<T, D::Error>) {
        if result.is_err() {
            self.draw_failures = self.draw_failures.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("display: draw failed ({} total)", self.draw_failures);
        }
    }
}

impl<D> Rasterizer for EgRasterizer<D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    fn clear_screen(&mut self) {
        let result = self.target.clear(to_color(self.background));
        self.check(result);
    }

    fn print(&mut self, point: Point, text: &str, size: FontSize, align: TextAlign, color: Color) {
        let character_style = MonoTextStyle::new(font_for(size), to_color::<D::Color>(color));
        let text_style = TextStyleBuilder::new()
            .alignment(to_alignment(align))
            .baseline(Baseline::Top)
            .build();

        let position = self.anchor(point, align);
        let result = Text::with_text_style(text, position, character_style, text_style)
            .draw(&mut self.target);
        self.check(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;
    use handset_ui::{
        ClockSource, Color, CurTime, KeyMask, Point, PowerSensor, RadioState, Ui, UiConfig,
    };
    use std::vec;
    use std::vec::Vec;

    /// In-memory RGB framebuffer that ignores off-screen pixels
    struct FrameBuffer {
        width: u32,
        height: u32,
        pixels: Vec<Rgb888>,
    }

    impl FrameBuffer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![Rgb888::new(1, 2, 3); (width * height) as usize],
            }
        }

        fn get(&self, x: u32, y: u32) -> Rgb888 {
            self.pixels[(y * self.width + x) as usize]
        }

        /// Bounding box of pixels that differ from `background`
        fn lit(&self, background: Rgb888) -> Option<Rectangle> {
            let mut min = (u32::MAX, u32::MAX);
            let mut max = (0, 0);
            let mut any = false;
            for y in 0..self.height {
                for x in 0..self.width {
                    if self.get(x, y) != background {
                        any = true;
                        min = (min.0.min(x), min.1.min(y));
                        max = (max.0.max(x), max.1.max(y));
                    }
                }
            }
            any.then(|| {
                Rectangle::with_corners(
                    EgPoint::new(min.0 as i32, min.1 as i32),
                    EgPoint::new(max.0 as i32, max.1 as i32),
                )
            })
        }

        fn rows_lit(&self, background: Rgb888, top: u32, bottom: u32) -> bool {
            (top..bottom).any(|y| (0..self.width).any(|x| self.get(x, y) != background))
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(self.width, self.height)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb888;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
                {
                    let idx = (p.y as u32 * self.width + p.x as u32) as usize;
                    self.pixels[idx] = color;
                }
            }
            Ok(())
        }
    }

    /// Target whose bus is always down
    struct BrokenTarget;

    impl OriginDimensions for BrokenTarget {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for BrokenTarget {
        type Color = Rgb888;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    fn rasterizer() -> EgRasterizer<FrameBuffer> {
        EgRasterizer::new(FrameBuffer::new(160, 128), Color::BLACK)
    }

    #[test]
    fn test_clear_fills_background() {
        let mut r = rasterizer();
        r.clear_screen();
        assert!(r.target().pixels.iter().all(|p| *p == Rgb888::BLACK));
        assert_eq!(r.draw_failures(), 0);
    }

    #[test]
    fn test_profile_background_is_painted() {
        let theme = Theme {
            foreground: Color::WHITE,
            background: Color::new(0, 0, 128),
        };
        let config = UiConfig::new(160, 128).with_theme(theme);
        let rasterizer = EgRasterizer::with_theme(FrameBuffer::new(160, 128), &config.theme);
        assert_eq!(rasterizer.background(), config.theme.background);

        let mut ui = Ui::new(&config, rasterizer, Rtc, Battery).unwrap();
        ui.init().unwrap();
        ui.update(&RadioState::simplex(146.52), KeyMask::NONE).unwrap();

        // Bottom bar is never drawn on, so it shows the clear color
        let fb = ui.rasterizer().target();
        let bottom = ui.composer().layout().bottom_bar();
        let navy = Rgb888::new(0, 0, 128);
        for y in u32::from(bottom.top)..u32::from(bottom.bottom()) {
            for x in 0..fb.width {
                assert_eq!(fb.get(x, y), navy);
            }
        }
    }

    #[test]
    fn test_centered_text() {
        let mut r = rasterizer();
        r.clear_screen();
        r.print(
            Point::new(0, 25),
            "Rx: 146.52000",
            FontSize::Size3,
            TextAlign::Center,
            Color::WHITE,
        );

        let lit = r.target().lit(Rgb888::BLACK).unwrap();
        let center = lit.top_left.x + lit.size.width as i32 / 2;
        assert!((center - 80).abs() <= 5, "center at {}", center);
        assert!(lit.top_left.y >= 25);
    }

    #[test]
    fn test_left_and_right_share_a_row_without_overlap() {
        let mut r = rasterizer();
        r.clear_screen();
        r.print(Point::new(0, 5), "3.7V ", FontSize::Size1, TextAlign::Right, Color::WHITE);
        let right = r.target().lit(Rgb888::BLACK).unwrap();
        assert!(right.top_left.x > 120);
        assert!(right.top_left.x + (right.size.width as i32) <= 160);

        r.clear_screen();
        r.print(Point::new(0, 5), "12:30", FontSize::Size1, TextAlign::Center, Color::WHITE);
        let center = r.target().lit(Rgb888::BLACK).unwrap();
        assert!(center.top_left.x + (center.size.width as i32) < right.top_left.x);
    }

    #[test]
    fn test_left_aligned_starts_at_point() {
        let mut r = rasterizer();
        r.clear_screen();
        r.print(Point::new(10, 0), "A", FontSize::Size4, TextAlign::Left, Color::WHITE);
        let lit = r.target().lit(Rgb888::BLACK).unwrap();
        assert!(lit.top_left.x >= 10 && lit.top_left.x < 20);
    }

    #[test]
    fn test_draw_failures_are_counted() {
        let mut r = EgRasterizer::new(BrokenTarget, Color::BLACK);
        r.clear_screen();
        r.print(Point::new(0, 0), "x", FontSize::Size1, TextAlign::Left, Color::WHITE);
        assert_eq!(r.draw_failures(), 2);
    }

    struct Rtc;

    impl ClockSource for Rtc {
        fn time(&mut self) -> CurTime {
            CurTime::new(12, 30)
        }
    }

    struct Battery;

    impl PowerSensor for Battery {
        fn battery_voltage(&mut self) -> f32 {
            3.7
        }
    }

    #[test]
    fn test_main_screen_leaves_reserved_regions_blank() {
        let theme = Theme::default();
        let config = UiConfig::new(160, 128).with_theme(theme);
        let rasterizer = EgRasterizer::with_theme(FrameBuffer::new(160, 128), &config.theme);

        let mut ui = Ui::new(&config, rasterizer, Rtc, Battery).unwrap();
        ui.init().unwrap();
        assert_eq!(
            ui.update(&RadioState::simplex(146.52), KeyMask::NONE),
            Ok(true)
        );

        let layout = *ui.composer().layout();
        let fb = ui.rasterizer().target();
        let bg: Rgb888 = to_color(theme.background);

        let top = layout.top_bar();
        let line1 = layout.row(0).unwrap();
        let line2 = layout.row(1).unwrap();
        let line3 = layout.row(2).unwrap();
        let bottom = layout.bottom_bar();

        assert!(fb.rows_lit(bg, top.top.into(), top.bottom().into()));
        assert!(fb.rows_lit(bg, line1.top.into(), line1.bottom().into()));
        assert!(fb.rows_lit(bg, line2.top.into(), line2.bottom().into()));
        assert!(!fb.rows_lit(bg, line3.top.into(), line3.bottom().into()));
        assert!(!fb.rows_lit(bg, bottom.top.into(), bottom.bottom().into()));
        assert_eq!(ui.rasterizer().draw_failures(), 0);
    }
}
