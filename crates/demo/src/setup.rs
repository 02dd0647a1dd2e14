// File: crates/demo/src/setup.rs
// Summary: Turns CLI options into validated chart instances laid out on a grid.

use anyhow::{bail, Context, Result};
use pulse_core::{theme, ChartConfig, ChartInstance, GridLayout, Series};
use tracing::info;

use crate::cli::ChartArgs;
use crate::data;

pub fn layout(args: &ChartArgs) -> GridLayout {
    GridLayout::new(args.rows, args.cols)
}

/// Saved JSON options (if any), then flag overrides, then the grid cell size.
pub fn resolve_config(args: &ChartArgs) -> Result<ChartConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<ChartConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ChartConfig::default(),
    };

    if let Some(v) = args.view_range { cfg.view_range = v; }
    if let Some(v) = args.rolling_average { cfg.rolling_average_window = v; }
    if let Some(v) = args.use_rolling_average { cfg.use_rolling_average = v; }
    if let Some(v) = args.show_x_axis_ticks { cfg.show_x_axis_ticks = v; }
    if let Some(v) = args.show_threshold { cfg.show_threshold = v; }
    if let Some(v) = args.ease_in_out { cfg.ease_in_out = v; }
    if let Some(v) = args.x_axis_inverse_static { cfg.x_axis_inverse_static = v; }
    if let Some(v) = args.background_encoding { cfg.background_encoding = v; }
    if let Some(v) = args.label_position { cfg.label_position = v.into(); }
    if let Some(v) = args.dynamic_label_size { cfg.dynamic_label_size = v.into(); }

    let (w, h) = layout(args).cell_size(args.width, args.height);
    Ok(cfg.with_size(w, h))
}

fn load_sources(args: &ChartArgs, capacity: usize) -> Result<Vec<(String, Series)>> {
    if !args.data.is_empty() {
        return args
            .data
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let series = data::load_series_csv(path)?;
                Ok((format!("Machine {}", i + 1), series))
            })
            .collect();
    }
    let machines = args.machines.unwrap_or(capacity);
    Ok((1..=machines as u32)
        .map(|m| (format!("Machine {m}"), data::synthetic_series(m, args.seed, args.samples)))
        .collect())
}

/// One chart per data source, in grid order.
pub fn build_charts(args: &ChartArgs) -> Result<Vec<ChartInstance>> {
    let grid = layout(args);
    let config = resolve_config(args)?;
    let sources = load_sources(args, grid.capacity())?;
    if sources.len() > grid.capacity() {
        bail!("{} charts do not fit a {}x{} grid", sources.len(), grid.rows, grid.cols);
    }
    let theme = theme::find(&args.theme);
    let charts = sources
        .into_iter()
        .map(|(title, series)| {
            ChartInstance::new(series, title.clone(), config.clone())
                .map(|c| c.with_theme(theme))
                .with_context(|| format!("creating chart '{title}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(
        charts = charts.len(),
        cell_width = config.width,
        cell_height = config.height,
        view_range = config.view_range,
        "charts ready"
    );
    Ok(charts)
}
