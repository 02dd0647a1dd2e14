// File: crates/pulse-core/src/grid.rs
// Summary: Tick layout helpers for axes and grid lines.

/// Round tick values covering `[start, end]`, roughly `count` of them, on a
/// 1/2/5 × 10^k step.
pub fn nice_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !end.is_finite() { return Vec::new(); }
    if (end - start).abs() < 1e-12 { return vec![start]; }
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let step = tick_step(lo, hi, count);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let out: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
    if start <= end { out } else { out.into_iter().rev().collect() }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}
