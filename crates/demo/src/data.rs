// File: crates/demo/src/data.rs
// Summary: Series sources for the demos: `index,value` CSV files and synthetic machine readings.

use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::Series;
use tracing::{debug, warn};

/// Load a sensor series from a CSV with a `value` column and an optional `index` column.
///
/// Headers are matched case-insensitively. Rows whose value does not parse are
/// skipped. When every kept row has an index, rows are ordered by it; samples
/// are then numbered 1..=n in that order.
pub fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let find = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_value = find(&["value", "val", "y"])
        .with_context(|| format!("{}: no value column in headers {headers:?}", path.display()))?;
    let i_index = find(&["index", "idx", "x", "step"]);

    let mut rows: Vec<(Option<u32>, f64)> = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        let Some(value) = value else {
            skipped += 1;
            continue;
        };
        let index = i_index.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<u32>().ok());
        rows.push((index, value));
    }
    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped rows without a numeric value");
    }
    if rows.iter().all(|(i, _)| i.is_some()) {
        rows.sort_by_key(|(i, _)| *i);
    }
    debug!(path = %path.display(), samples = rows.len(), "loaded series");
    Ok(Series::from_values(rows.into_iter().map(|(_, v)| v)))
}

fn xorshift32(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Deterministic bounded random walk in [0, 100] for machine `machine` (1-based).
pub fn synthetic_series(machine: u32, seed: u32, len: usize) -> Series {
    let mut state = machine
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(seed.wrapping_mul(0x85EB_CA6B))
        .wrapping_add(0x7F4A_7C15);
    if state == 0 {
        state = 0x7F4A_7C15;
    }
    state = xorshift32(state);
    let mut value = 20.0 + (state % 60) as f64;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(value.round());
        state = xorshift32(state);
        let unit = state as f64 / u32::MAX as f64;
        // steps of up to 12 units either way, pulled gently back toward the middle
        let pull = (50.0 - value) * 0.05;
        value = (value + (unit - 0.5) * 24.0 + pull).clamp(0.0, 100.0);
    }
    Series::from_values(values)
}
