// File: crates/demo/src/main.rs
// Summary: Headless demo: animates a grid of machine charts on simulated time and writes PNG frames.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pulse_core::{AnimationDriver, ANIM_DURATION};
use pulse_demo::cli::FramesCli;
use pulse_demo::{logging, setup};
use pulse_render_skia::{RenderOptions, SkiaRenderer};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let cli = FramesCli::parse();

    let charts = setup::build_charts(&cli.chart)?;
    let layout = setup::layout(&cli.chart);
    let mut driver = AnimationDriver::new();
    for chart in charts {
        driver.register(chart);
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();

    // Last tick fires at ticks * delay; leave room for its transition to land.
    let end = driver.delay() * cli.ticks + ANIM_DURATION;
    let frame = Duration::from_secs(1) / cli.fps;
    driver.start(Duration::ZERO);

    let mut now = Duration::ZERO;
    let mut n = 0usize;
    loop {
        let fired = driver.advance(now);
        if fired > 0 {
            info!(step = driver.step() - 1, at_ms = now.as_millis() as u64, "tick");
        }
        let scenes = driver.instances().iter().map(|c| c.scene()).collect::<Vec<_>>();
        let bytes = renderer.render_grid_png_bytes(&scenes, &layout, cli.chart.width, cli.chart.height, &opts)?;
        write_frame(&cli.out, n, &bytes)?;
        n += 1;
        if now >= end {
            break;
        }
        now = (now + frame).min(end);
    }
    driver.stop();
    info!(frames = n, out = %cli.out.display(), "done");
    Ok(())
}

fn write_frame(dir: &Path, n: usize, bytes: &[u8]) -> Result<()> {
    let path = dir.join(format!("frame_{n:05}.png"));
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))
}
