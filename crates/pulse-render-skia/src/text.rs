// File: crates/pulse-render-skia/src/text.rs
// Summary: Text shaping for axis ticks, titles and value labels using Skia textlayout.

use pulse_core::scene::{HAlign, VAlign};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Shaped size of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub width: f32,
    pub height: f32,
    /// Distance from the box top to the alphabetic baseline.
    pub baseline: f32,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"]);
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> TextBox {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        Self::box_of(&p)
    }

    fn box_of(p: &Paragraph) -> TextBox {
        TextBox { width: p.max_intrinsic_width(), height: p.height(), baseline: p.alphabetic_baseline() }
    }

    /// Draw `text` aligned around `(x, y)`; returns the top-left of the drawn box.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        halign: HAlign,
        valign: VAlign,
    ) -> (f32, f32, TextBox) {
        let p = self.layout(text, size, color);
        let tb = Self::box_of(&p);
        let left = match halign {
            HAlign::Left => x,
            HAlign::Center => x - tb.width / 2.0,
            HAlign::Right => x - tb.width,
        };
        let top = match valign {
            VAlign::Top => y,
            VAlign::Middle => y - tb.height / 2.0,
            VAlign::Baseline => y - tb.baseline,
        };
        p.paint(canvas, (left, top));
        (left, top, tb)
    }
}
