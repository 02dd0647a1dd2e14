// File: crates/pulse-core/src/scene.rs
// Summary: Renderer-agnostic display list for one chart frame.

use crate::geometry::{Point, Rect};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Baseline,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, color: Color, width: f32 },
    Polyline { points: Vec<Point>, color: Color, width: f32 },
    Circle { center: Point, radius: f32, color: Color },
    Rect { rect: Rect, color: Color },
    Text { text: String, at: Point, size: f32, color: Color, halign: HAlign, valign: VAlign },
    /// Text centered on `center` over a rounded box sized to the shaped text
    /// plus `padding`; the renderer measures the text.
    Label {
        text: String,
        center: Point,
        size: f32,
        color: Color,
        background: Option<Color>,
        padding: (f32, f32),
        corner_radius: f32,
    },
}

/// Shapes drawn under one clip and horizontal offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    pub clip: Option<Rect>,
    pub offset_x: f32,
    pub shapes: Vec<Shape>,
}

impl Layer {
    pub fn new() -> Self { Self::default() }

    pub fn clipped(clip: Rect) -> Self {
        Self { clip: Some(clip), ..Self::default() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

/// Everything needed to draw one chart, in chart-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Back to front.
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Iterate every shape together with its layer.
    pub fn shapes(&self) -> impl Iterator<Item = (&Layer, &Shape)> {
        self.layers.iter().flat_map(|l| l.shapes.iter().map(move |s| (l, s)))
    }

    /// The value label, if the scene has one.
    pub fn label(&self) -> Option<&Shape> {
        self.shapes().map(|(_, s)| s).find(|s| matches!(s, Shape::Label { .. }))
    }
}
