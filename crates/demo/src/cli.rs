// File: crates/demo/src/cli.rs
// Summary: clap definitions shared by the headless and windowed demos.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use pulse_core::{DynamicLabelSize, LabelPosition};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPositionArg {
    Follow,
    Fixed,
    Side,
}

impl From<LabelPositionArg> for LabelPosition {
    fn from(v: LabelPositionArg) -> Self {
        match v {
            LabelPositionArg::Follow => LabelPosition::Follow,
            LabelPositionArg::Fixed => LabelPosition::Fixed,
            LabelPositionArg::Side => LabelPosition::Side,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSizeArg {
    None,
    Linear,
    #[value(alias = "u-shaped")]
    Ushaped,
}

impl From<LabelSizeArg> for DynamicLabelSize {
    fn from(v: LabelSizeArg) -> Self {
        match v {
            LabelSizeArg::None => DynamicLabelSize::None,
            LabelSizeArg::Linear => DynamicLabelSize::Linear,
            LabelSizeArg::Ushaped => DynamicLabelSize::UShaped,
        }
    }
}

/// Data, layout and per-chart display options.
#[derive(Args, Clone, Debug)]
pub struct ChartArgs {
    /// CSV file with `index,value` columns; repeat for one chart per file.
    #[arg(long = "data", value_name = "CSV")]
    pub data: Vec<PathBuf>,
    /// Number of synthetic machines when no --data is given (default: fills the grid).
    #[arg(long)]
    pub machines: Option<usize>,
    /// Samples per synthetic machine.
    #[arg(long, default_value_t = 60)]
    pub samples: usize,
    /// Seed for the synthetic machines.
    #[arg(long, default_value_t = 1)]
    pub seed: u32,
    /// Grid rows.
    #[arg(long, default_value_t = 4)]
    pub rows: u32,
    /// Grid columns.
    #[arg(long, default_value_t = 5)]
    pub cols: u32,
    /// Width of the whole grid in pixels.
    #[arg(long, default_value_t = 1750)]
    pub width: u32,
    /// Height of the whole grid in pixels.
    #[arg(long, default_value_t = 1000)]
    pub height: u32,
    /// Theme preset (light or dark).
    #[arg(long, default_value = "light")]
    pub theme: String,
    /// JSON file with saved chart options (camelCase keys); flags below override it.
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Samples visible at once.
    #[arg(long)]
    pub view_range: Option<usize>,
    /// Window of the rolling average.
    #[arg(long)]
    pub rolling_average: Option<usize>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub use_rolling_average: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub show_x_axis_ticks: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub show_threshold: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub ease_in_out: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub x_axis_inverse_static: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub background_encoding: Option<bool>,
    #[arg(long, value_enum)]
    pub label_position: Option<LabelPositionArg>,
    #[arg(long, value_enum)]
    pub dynamic_label_size: Option<LabelSizeArg>,
}

/// Render an animated grid of machine charts to PNG frames on simulated time.
#[derive(Parser, Debug)]
#[command(name = "pulse-demo", version, about)]
pub struct FramesCli {
    #[command(flatten)]
    pub chart: ChartArgs,
    /// Driver ticks to simulate.
    #[arg(long, default_value_t = 10)]
    pub ticks: u32,
    /// Frames written per simulated second.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,
    /// Output directory for frame_NNNNN.png files.
    #[arg(long, default_value = "target/out/frames")]
    pub out: PathBuf,
}
