// File: crates/pulse-core/src/axis.rs
// Summary: Axis tick placement and labelling for the scrolling x axis and fixed y axis.

use crate::grid::nice_ticks;
use crate::types::VALUE_DOMAIN;

/// One axis tick in domain units with its optional text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

/// Sample distance between labelled x ticks for a view of `view_range` samples.
pub fn tick_frequency(view_range: usize) -> u32 {
    if view_range > 100 {
        10
    } else if view_range > 50 {
        5
    } else if view_range > 15 {
        2
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XAxisSpec {
    pub series_len: usize,
    pub view_range: usize,
    pub show_labels: bool,
    /// Labels count tick positions back from the newest visible one, so the
    /// n-th tick reads `n - view_range` whatever the tick frequency.
    pub inverse_static: bool,
}

impl XAxisSpec {
    pub fn frequency(&self) -> u32 {
        tick_frequency(self.view_range)
    }

    /// Ticks at `1, 1 + freq, ...` over the whole series.
    pub fn ticks(&self) -> Vec<Tick> {
        self.ticks_between(1, self.series_len as u64)
    }

    /// The ticks of [`ticks`](Self::ticks) whose sample index lies in `lo..=hi`.
    pub fn ticks_between(&self, lo: u64, hi: u64) -> Vec<Tick> {
        let freq = u64::from(self.frequency());
        let last = hi.min(self.series_len as u64);
        let first = (lo.max(1) - 1).div_ceil(freq);
        (first..)
            .map(|pos| (pos, 1 + pos * freq))
            .take_while(|&(_, v)| v <= last)
            .map(|(pos, v)| Tick { value: v as f64, label: self.label_for(pos) })
            .collect()
    }

    fn label_for(&self, pos: u64) -> Option<String> {
        if !self.show_labels {
            return None;
        }
        if self.inverse_static {
            Some((pos as i64 + 1 - self.view_range as i64).to_string())
        } else {
            Some((1 + pos * u64::from(self.frequency())).to_string())
        }
    }

    /// Sample indices that carry a vertical grid line; only the first view.
    pub fn grid_values(&self) -> Vec<f64> {
        let freq = self.frequency() as usize;
        (0..self.view_range / freq)
            .map(|pos| 1 + pos * freq)
            .take_while(|&v| v <= self.series_len)
            .map(|v| v as f64)
            .collect()
    }
}

/// Ticks of the fixed value axis (`0, 10, ..., 100`).
pub fn y_ticks() -> Vec<Tick> {
    nice_ticks(VALUE_DOMAIN.0, VALUE_DOMAIN.1, 10)
        .into_iter()
        .map(|v| Tick { value: v, label: Some(format!("{}", v as i64)) })
        .collect()
}
