// File: crates/pulse-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for pulse-core scenes: PNG/RGBA output and grid compositing.

pub mod text;

use anyhow::{anyhow, Result};
use pulse_core::geometry::{Point, Rect};
use pulse_core::scene::{HAlign, Layer, Scene, Shape, VAlign};
use pulse_core::{Color, GridLayout};
use skia_safe as skia;
use tracing::debug;

pub use text::{TextBox, TextShaper};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
    /// Fill behind grid cells that hold no chart.
    pub grid_background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, grid_background: Color::WHITE }
    }
}

/// RGBA8 pixels, width, height, row stride in bytes.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    pub fn text(&self) -> &TextShaper { &self.text }

    /// Draw one scene with its top-left at the canvas origin.
    pub fn render_scene(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let mut bg = fill(scene.background);
        bg.set_anti_alias(false);
        canvas.draw_rect(skia::Rect::from_wh(scene.width as f32, scene.height as f32), &bg);
        for layer in &scene.layers {
            self.draw_layer(canvas, layer, opts);
        }
    }

    fn draw_layer(&self, canvas: &skia::Canvas, layer: &Layer, opts: &RenderOptions) {
        canvas.save();
        if let Some(clip) = layer.clip {
            canvas.clip_rect(to_rect(clip), skia::ClipOp::Intersect, true);
        }
        if layer.offset_x != 0.0 {
            canvas.translate((layer.offset_x, 0.0));
        }
        for shape in &layer.shapes {
            self.draw_shape(canvas, shape, opts);
        }
        canvas.restore();
    }

    fn draw_shape(&self, canvas: &skia::Canvas, shape: &Shape, opts: &RenderOptions) {
        match shape {
            Shape::Line { from, to, color, width } => {
                canvas.draw_line(to_point(*from), to_point(*to), &stroke(*color, *width));
            }
            Shape::Polyline { points, color, width } => {
                let Some((first, rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to(to_point(*first));
                for p in rest {
                    path.line_to(to_point(*p));
                }
                canvas.draw_path(&path, &stroke(*color, *width));
            }
            Shape::Circle { center, radius, color } => {
                canvas.draw_circle(to_point(*center), *radius, &fill(*color));
            }
            Shape::Rect { rect, color } => {
                canvas.draw_rect(to_rect(*rect), &fill(*color));
            }
            Shape::Text { text, at, size, color, halign, valign } => {
                if opts.draw_labels {
                    self.text.draw(canvas, text, at.x, at.y, *size, to_skia(*color), *halign, *valign);
                }
            }
            Shape::Label { text, center, size, color, background, padding, corner_radius } => {
                if !opts.draw_labels {
                    return;
                }
                let tb = self.text.measure(text, *size);
                if let Some(bg) = background {
                    let w = tb.width + padding.0 * 2.0;
                    let h = tb.height + padding.1 * 2.0;
                    let r = skia::Rect::from_xywh(center.x - w / 2.0, center.y - h / 2.0, w, h);
                    canvas.draw_round_rect(r, *corner_radius, *corner_radius, &fill(*bg));
                }
                self.text.draw(canvas, text, center.x, center.y, *size, to_skia(*color), HAlign::Center, VAlign::Middle);
            }
        }
    }

    fn raster(&self, width: u32, height: u32) -> Result<skia::Surface> {
        if width == 0 || height == 0 {
            return Err(anyhow!("cannot render a {width}x{height} surface"));
        }
        skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| anyhow!("failed to create raster surface"))
    }

    fn draw_surface(&self, scene: &Scene, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = self.raster(scene.width, scene.height)?;
        self.render_scene(surface.canvas(), scene, opts);
        Ok(surface)
    }

    fn draw_grid_surface(
        &self,
        scenes: &[Scene],
        layout: &GridLayout,
        width: u32,
        height: u32,
        opts: &RenderOptions,
    ) -> Result<skia::Surface> {
        let mut surface = self.raster(width, height)?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.grid_background));
        if scenes.len() > layout.capacity() {
            debug!(scenes = scenes.len(), capacity = layout.capacity(), "grid too small, extra charts not drawn");
        }
        for (i, scene) in scenes.iter().enumerate() {
            let Some(cell) = layout.cell(i, width, height) else { break };
            canvas.save();
            canvas.translate((cell.left, cell.top));
            canvas.clip_rect(skia::Rect::from_wh(cell.width(), cell.height()), skia::ClipOp::Intersect, false);
            self.render_scene(canvas, scene, opts);
            canvas.restore();
        }
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(scene, opts)?;
        encode_png(&mut surface)
    }

    /// Render the scene to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, opts)?;
        write_file(path.as_ref(), &bytes)
    }

    pub fn render_to_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<Rgba8> {
        let mut surface = self.draw_surface(scene, opts)?;
        read_rgba8(&mut surface)
    }

    pub fn render_grid_png_bytes(
        &self,
        scenes: &[Scene],
        layout: &GridLayout,
        width: u32,
        height: u32,
        opts: &RenderOptions,
    ) -> Result<Vec<u8>> {
        let mut surface = self.draw_grid_surface(scenes, layout, width, height, opts)?;
        encode_png(&mut surface)
    }

    pub fn render_grid_rgba8(
        &self,
        scenes: &[Scene],
        layout: &GridLayout,
        width: u32,
        height: u32,
        opts: &RenderOptions,
    ) -> Result<Rgba8> {
        let mut surface = self.draw_grid_surface(scenes, layout, width, height, opts)?;
        read_rgba8(&mut surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn to_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn stroke(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn fill(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

fn read_rgba8(surface: &mut skia::Surface) -> Result<Rgba8> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(anyhow!("read_pixels failed"));
    }
    Ok((px, w as u32, h as u32, stride))
}

fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
