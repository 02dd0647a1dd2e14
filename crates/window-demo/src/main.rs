// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that animates a grid of machine charts in real time via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use pulse_core::{AnimationDriver, GridLayout};
use pulse_demo::{logging, setup, ChartArgs};
use pulse_render_skia::{RenderOptions, SkiaRenderer};
use tracing::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const FRAME: Duration = Duration::from_millis(16);

/// Live grid of machine charts. Space starts/stops the animation, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "pulse-window-demo", version, about)]
struct WindowCli {
    #[command(flatten)]
    chart: ChartArgs,
}

fn main() -> Result<()> {
    logging::init();
    let cli = WindowCli::parse();

    let charts = setup::build_charts(&cli.chart)?;
    let layout = setup::layout(&cli.chart);
    let mut driver = AnimationDriver::new();
    for chart in charts {
        driver.register(chart);
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pulse Chart - Machines")
        .with_inner_size(PhysicalSize::new(cli.chart.width, cli.chart.height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let origin = Instant::now();
    driver.start(Duration::ZERO);
    info!("animation started; space toggles, escape quits");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => {
                    // charts keep their size; only the grid cells move
                    driver.resize();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::Space => {
                        if driver.is_running() {
                            driver.stop();
                            info!(step = driver.step(), "animation stopped");
                        } else {
                            driver.start(origin.elapsed());
                            info!(step = driver.step(), "animation started");
                        }
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                driver.advance(origin.elapsed());
                window.request_redraw();
                *cf = ControlFlow::WaitUntil(Instant::now() + FRAME);
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = draw(&mut surface, &renderer, &driver, &layout, size, &opts) {
                    error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn draw(
    surface: &mut softbuffer::Surface,
    renderer: &SkiaRenderer,
    driver: &AnimationDriver,
    layout: &GridLayout,
    size: PhysicalSize<u32>,
    opts: &RenderOptions,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let scenes = driver.instances().iter().map(|c| c.scene()).collect::<Vec<_>>();
    let (rgba, _, _, _) = renderer.render_grid_rgba8(&scenes, layout, size.width, size.height, opts)?;

    // softbuffer wants 0RGB per u32
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
