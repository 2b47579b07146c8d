//! Region composition
//!
//! Each `draw_*` method fills one region: it takes placement from the
//! layout policy, strings from the field formatter, and issues print
//! requests to the rasterizer. Fields sharing a row rely on the
//! rasterizer's alignment to stay apart.

use crate::config::Theme;
use crate::format::{self, FreqLabel};
use crate::layout::{DisplayGeometry, RegionLayout};
use crate::radio::RadioState;
use crate::traits::{ClockSource, Point, PowerSensor, Rasterizer, TextAlign, TextField};

/// Draws the main-screen regions for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composer {
    geometry: DisplayGeometry,
    theme: Theme,
}

impl Composer {
    pub fn new(geometry: DisplayGeometry, theme: Theme) -> Self {
        Self { geometry, theme }
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn layout(&self) -> &RegionLayout {
        self.geometry.layout()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw the top status bar: clock centered, battery voltage on the right
    pub fn draw_top_bar<R, C, P>(&self, rasterizer: &mut R, clock: &mut C, power: &mut P)
    where
        R: Rasterizer + ?Sized,
        C: ClockSource + ?Sized,
        P: PowerSensor + ?Sized,
    {
        let layout = self.layout();
        let pos = Point::new(0, layout.top_bar_y);

        let time = format::clock(clock.time());
        TextField::new(&time, pos, layout.bar_font, TextAlign::Center)
            .print(rasterizer, self.theme.foreground);

        let volts = format::battery(power.battery_voltage());
        TextField::new(&volts, pos, layout.bar_font, TextAlign::Right)
            .print(rasterizer, self.theme.foreground);
    }

    /// Draw the VFO block: receive frequency on line 1, transmit on line 2
    pub fn draw_main_content<R>(&self, rasterizer: &mut R, state: &RadioState)
    where
        R: Rasterizer + ?Sized,
    {
        let layout = self.layout();
        let [line1_y, line2_y, _] = layout.row_y_offsets;

        let rx = format::frequency(FreqLabel::Rx, state.rx_freq);
        TextField::new(&rx, Point::new(0, line1_y), layout.row_font, TextAlign::Center)
            .print(rasterizer, self.theme.foreground);

        let tx = format::frequency(FreqLabel::Tx, state.tx_freq);
        TextField::new(&tx, Point::new(0, line2_y), layout.row_font, TextAlign::Center)
            .print(rasterizer, self.theme.foreground);
    }
}
