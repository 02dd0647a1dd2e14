// File: crates/pulse-core/src/config.rs
// Summary: Per-chart display configuration with defaults, serde support and validation.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::types::{Insets, HEIGHT, INFO_WIDTH, WIDTH};

/// How the label font size reacts to the label value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicLabelSize {
    /// Constant size.
    #[default]
    None,
    /// Grows from the minimum at 0 to the maximum at 100.
    Linear,
    /// Largest at both ends of the domain, smallest at 50.
    #[serde(alias = "u-shaped", alias = "u_shaped")]
    UShaped,
}

/// Where the value label sits relative to the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Tracks the rightmost visible point.
    #[default]
    Follow,
    /// Pinned near the top of the plot above the rightmost point.
    Fixed,
    /// Large label in an info panel right of the plot.
    Side,
}

/// Display options captured when a chart is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Number of samples visible at a time.
    pub view_range: usize,
    /// Number of samples averaged for the rolling-average label.
    #[serde(alias = "rollingAverage")]
    pub rolling_average_window: usize,
    pub show_x_axis_ticks: bool,
    pub show_threshold: bool,
    pub ease_in_out: bool,
    /// Keep the x axis still and label ticks relative to the newest sample.
    #[serde(alias = "XAxisInverseStatic")]
    pub x_axis_inverse_static: bool,
    /// Tint the plot background by the label's threshold class.
    pub background_encoding: bool,
    pub use_rolling_average: bool,
    pub dynamic_label_size: DynamicLabelSize,
    pub label_position: LabelPosition,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            view_range: 10,
            rolling_average_window: 5,
            show_x_axis_ticks: true,
            show_threshold: true,
            ease_in_out: false,
            x_axis_inverse_static: false,
            background_encoding: false,
            use_rolling_average: false,
            dynamic_label_size: DynamicLabelSize::None,
            label_position: LabelPosition::Follow,
        }
    }
}

impl ChartConfig {
    /// Same options at a different canvas size (e.g. a grid cell).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Width of the info panel right of the chart area.
    pub fn info_width(&self) -> u32 {
        if self.label_position == LabelPosition::Side { INFO_WIDTH } else { 0 }
    }

    /// Width left for the chart once the info panel is taken out.
    pub fn chart_width(&self) -> u32 {
        self.width.saturating_sub(self.info_width())
    }

    /// Check the options against a series of `series_len` samples.
    pub fn validate(&self, series_len: usize) -> Result<(), ChartError> {
        if series_len == 0 {
            return Err(ChartError::EmptySeries);
        }
        if self.view_range == 0 {
            return Err(ChartError::ViewRangeZero);
        }
        if self.view_range > series_len {
            return Err(ChartError::ViewRangeExceedsSeries { view_range: self.view_range, len: series_len });
        }
        if self.rolling_average_window == 0 || self.rolling_average_window > self.view_range {
            return Err(ChartError::RollingWindowOutOfRange {
                window: self.rolling_average_window,
                view_range: self.view_range,
            });
        }
        let pad = Insets::default();
        if self.chart_width() <= pad.hsum() || self.height <= pad.vsum() {
            return Err(ChartError::CanvasTooSmall { width: self.width, height: self.height });
        }
        Ok(())
    }
}
