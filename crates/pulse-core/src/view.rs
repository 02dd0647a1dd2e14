// File: crates/pulse-core/src/view.rs
// Per-chart mutable view state: scroll position and label, with their transitions.

use std::time::Duration;

use crate::geometry::Point;
use crate::transition::{Animated, Easing};

#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    /// 0-based offset of the leftmost visible sample.
    pub current_index: usize,
    pub label_value: f64,
    /// Horizontal offset of the scrolling layer, in pixels.
    pub translate_x: Animated,
    pub label_x: f32,
    pub label_y: Animated,
}

impl ViewState {
    pub fn new(label_value: f64, label_anchor: Point) -> Self {
        Self {
            current_index: 0,
            label_value,
            translate_x: Animated::new(0.0),
            label_x: label_anchor.x,
            label_y: Animated::new(label_anchor.y as f64),
        }
    }

    /// Scroll so that the sample at `current_index` sits at the left edge.
    pub fn scroll_to(&mut self, current_index: usize, tick_gap: f64, duration: Duration, easing: Easing) {
        self.current_index = current_index;
        self.translate_x.schedule(-tick_gap * current_index as f64, duration, easing);
    }

    /// Drive both transitions; true while either is still moving.
    pub fn advance(&mut self, now: Duration) -> bool {
        let moving = self.translate_x.advance(now);
        let label_moving = self.label_y.advance(now);
        moving || label_moving
    }

    /// Label anchor as currently shown.
    pub fn label_anchor(&self) -> Point {
        Point::new(self.label_x, self.label_y.value() as f32)
    }

    pub fn label_target(&self) -> Point {
        Point::new(self.label_x, self.label_y.target() as f32)
    }
}
