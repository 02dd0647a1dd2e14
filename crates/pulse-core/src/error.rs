// File: crates/pulse-core/src/error.rs
// Summary: Construction-time errors for chart instances.

use thiserror::Error;

/// Rejected inputs; reported once when a chart is built. `update` never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series is empty")]
    EmptySeries,
    #[error("view range must be at least 1")]
    ViewRangeZero,
    #[error("view range {view_range} exceeds series length {len}")]
    ViewRangeExceedsSeries { view_range: usize, len: usize },
    #[error("rolling average window {window} must be within 1..={view_range}")]
    RollingWindowOutOfRange { window: usize, view_range: usize },
    #[error("canvas {width}x{height} leaves no room for the plot")]
    CanvasTooSmall { width: u32, height: u32 },
    #[error("sample at position {index} is not a finite number")]
    NonFiniteValue { index: usize },
}
