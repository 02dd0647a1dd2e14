// File: crates/pulse-core/src/series.rs
// Summary: Sample and Series model for one data source.
// Notes:
// - A series is read-only once built; charts borrow values through slices.
// - Indices are 1-based and define the x axis.

use serde::{Deserialize, Serialize};

/// One reading of a data source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub index: u32,
    pub value: f64,
}

impl Sample {
    pub const fn new(index: u32, value: f64) -> Self {
        Self { index, value }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build from raw values; indices are assigned `1..=len`.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Sample::new(i as u32 + 1, v))
            .collect();
        Self { samples }
    }

    /// Build from samples as loaded; order is kept as given.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn get(&self, i: usize) -> Option<&Sample> { self.samples.get(i) }

    /// Position of the first sample whose value is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|s| !s.value.is_finite())
    }

    /// Mean of the `window` values ending at `end` (0-based, inclusive),
    /// rounded to the nearest integer. The window saturates at the series
    /// start; `None` when `end` is past the data or `window` is zero.
    pub fn rolling_average(&self, end: usize, window: usize) -> Option<f64> {
        if window == 0 || end >= self.samples.len() { return None; }
        let start = (end + 1).saturating_sub(window);
        let slice = &self.samples[start..=end];
        let sum: f64 = slice.iter().map(|s| s.value).sum();
        Some((sum / slice.len() as f64).round())
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}
