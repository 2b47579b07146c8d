//! Layout policy
//!
//! Maps each supported panel resolution to fixed region heights and text
//! anchors. All layout numbers live in one table in [`policy`].

pub mod geometry;
pub mod policy;

pub use geometry::{DisplayGeometry, Resolution};
pub use policy::{region_layout, Region, RegionLayout, ROW_COUNT};
