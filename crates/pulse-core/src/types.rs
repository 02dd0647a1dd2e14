// File: crates/pulse-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, timing, label metrics).

use std::time::Duration;

/// Default chart width in pixels.
pub const WIDTH: u32 = 700;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 400;

/// Interval between two driver ticks.
pub const ANIM_DELAY: Duration = Duration::from_millis(1500);
/// Length of the scroll transition scheduled by each tick.
pub const ANIM_DURATION: Duration = Duration::from_millis(500);

/// Sample units of empty space left of the first visible sample.
pub const X_AXIS_LEFT_MARGIN: f64 = 0.5;
/// Sample units of empty space right of the last visible sample.
pub const X_AXIS_RIGHT_MARGIN: f64 = 0.25;

/// Width of the info panel reserved right of the plot for side labels.
pub const INFO_WIDTH: u32 = 125;

pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const AXIS_FONT_SIZE: f32 = 13.0;
pub const AXIS_TICK_SIZE: f32 = 4.0;
pub const POINT_RADIUS: f32 = 4.0;
pub const LINE_WIDTH: f32 = 1.5;

pub const LABEL_FONT_DEFAULT_SIZE: f32 = 17.0;
pub const LABEL_FONT_MIN_SIZE: f32 = 14.0;
pub const LABEL_FONT_MAX_SIZE: f32 = 28.0;
pub const LABEL_FONT_SIDE_SIZE: f32 = 74.0;
/// Padding between label text and its background box (horizontal, vertical).
pub const LABEL_TEXT_PADDING: (f32, f32) = (4.0, 3.0);
pub const LABEL_CORNER_RADIUS: f32 = 3.0;

/// Lower and upper bound of the sample value domain.
pub const VALUE_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Padding between the chart edge and the plotting area.
    fn default() -> Self {
        Self::new(40, 20, 40, 30)
    }
}
