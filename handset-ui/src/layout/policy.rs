//! Region heights and text anchors per resolution
//!
//! The screen is stacked top to bottom as: top bar, three content rows,
//! bottom bar. Text is anchored one pixel below the region's vertical
//! padding.

use crate::traits::FontSize;

use super::geometry::Resolution;

/// Number of content rows between the status bars
pub const ROW_COUNT: usize = 3;

/// Distance from the padded top of a region to its text anchor
const ANCHOR_OFFSET: u16 = 1;

/// Per-resolution layout constants
struct LayoutSpec {
    bar_height: u16,
    row_height: u16,
    bar_padding: u16,
    row_padding: u16,
    bar_font: FontSize,
    row_font: FontSize,
}

const fn spec(resolution: Resolution) -> LayoutSpec {
    match resolution {
        Resolution::R160x128 => LayoutSpec {
            bar_height: 16,
            row_height: 32,
            bar_padding: 4,
            row_padding: 8,
            bar_font: FontSize::Size1,
            row_font: FontSize::Size3,
        },
        Resolution::R128x64 => LayoutSpec {
            bar_height: 8,
            row_height: 16,
            bar_padding: 0,
            row_padding: 0,
            bar_font: FontSize::Size1,
            row_font: FontSize::Size2,
        },
    }
}

/// Vertical pixel extent of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// First pixel row of the region
    pub top: u16,
    /// Height in pixels
    pub height: u16,
}

impl Region {
    /// One past the last pixel row of the region
    pub const fn bottom(&self) -> u16 {
        self.top + self.height
    }

    pub const fn contains(&self, y: u16) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Resolved layout for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionLayout {
    pub top_bar_height: u16,
    pub bottom_bar_height: u16,
    pub row_height: u16,
    /// Text anchor Y of the top bar
    pub top_bar_y: u16,
    /// Text anchor Y of each content row
    pub row_y_offsets: [u16; ROW_COUNT],
    /// Text anchor Y of the bottom bar
    pub bottom_bar_y: u16,
    /// Font size for status bar text
    pub bar_font: FontSize,
    /// Font size for content row text
    pub row_font: FontSize,
}

impl RegionLayout {
    pub const fn top_bar(&self) -> Region {
        Region {
            top: 0,
            height: self.top_bar_height,
        }
    }

    /// Extent of content row `index` (0-based)
    pub const fn row(&self, index: usize) -> Option<Region> {
        if index >= ROW_COUNT {
            return None;
        }
        Some(Region {
            top: self.top_bar_height + self.row_height * index as u16,
            height: self.row_height,
        })
    }

    pub const fn bottom_bar(&self) -> Region {
        Region {
            top: self.top_bar_height + self.row_height * ROW_COUNT as u16,
            height: self.bottom_bar_height,
        }
    }

    /// All regions from top to bottom
    pub fn regions(&self) -> [Region; ROW_COUNT + 2] {
        let mut regions = [self.top_bar(); ROW_COUNT + 2];
        for (i, slot) in regions[1..=ROW_COUNT].iter_mut().enumerate() {
            if let Some(row) = self.row(i) {
                *slot = row;
            }
        }
        regions[ROW_COUNT + 1] = self.bottom_bar();
        regions
    }

    /// Total height covered by all regions
    pub const fn total_height(&self) -> u16 {
        self.top_bar_height + self.row_height * ROW_COUNT as u16 + self.bottom_bar_height
    }
}

/// Compute the region layout for a resolution
///
/// Pure and cheap; callers may cache the result or call it every frame.
pub const fn region_layout(resolution: Resolution) -> RegionLayout {
    let s = spec(resolution);

    let bar_anchor = s.bar_padding + ANCHOR_OFFSET;
    let row_anchor = s.row_padding + ANCHOR_OFFSET;
    let rows_top = s.bar_height;
    let bottom_top = rows_top + s.row_height * ROW_COUNT as u16;

    RegionLayout {
        top_bar_height: s.bar_height,
        bottom_bar_height: s.bar_height,
        row_height: s.row_height,
        top_bar_y: bar_anchor,
        row_y_offsets: [
            rows_top + row_anchor,
            rows_top + s.row_height + row_anchor,
            rows_top + s.row_height * 2 + row_anchor,
        ],
        bottom_bar_y: bottom_top + bar_anchor,
        bar_font: s.bar_font,
        row_font: s.row_font,
    }
}
