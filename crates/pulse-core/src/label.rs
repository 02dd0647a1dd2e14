// File: crates/pulse-core/src/label.rs
// Summary: Value label rules: text, font size by value, and screen anchor.

use crate::config::{DynamicLabelSize, LabelPosition};
use crate::geometry::Point;
use crate::scale::{LinearScale, PiecewiseScale};
use crate::types::{
    LABEL_FONT_DEFAULT_SIZE, LABEL_FONT_MAX_SIZE, LABEL_FONT_MIN_SIZE, LABEL_FONT_SIDE_SIZE, VALUE_DOMAIN,
};

/// Font size of the value label for `value`.
pub fn font_size(mode: DynamicLabelSize, position: LabelPosition, value: f64) -> f32 {
    if position == LabelPosition::Side {
        return LABEL_FONT_SIDE_SIZE;
    }
    let (lo, hi) = VALUE_DOMAIN;
    match mode {
        DynamicLabelSize::None => LABEL_FONT_DEFAULT_SIZE,
        DynamicLabelSize::Linear => {
            LinearScale::new((lo, hi), (LABEL_FONT_MIN_SIZE as f64, LABEL_FONT_MAX_SIZE as f64)).to_px(value) as f32
        }
        DynamicLabelSize::UShaped => PiecewiseScale::new(
            [lo, (lo + hi) / 2.0, hi],
            [LABEL_FONT_MAX_SIZE, LABEL_FONT_MIN_SIZE, LABEL_FONT_MAX_SIZE],
        )
        .map(value),
    }
}

/// Integers print without a fraction; everything else as is.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Inputs for placing the label; all in chart pixels.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub chart_width: f32,
    pub chart_height: f32,
    pub info_width: f32,
    pub plot_top: f32,
    /// Screen position of the rightmost visible sample.
    pub rightmost: Point,
}

/// Initial anchor (text center) of the label.
pub fn anchor(position: LabelPosition, p: &Placement) -> Point {
    match position {
        LabelPosition::Side => Point::new(p.chart_width + p.info_width / 2.0 - 10.0, p.chart_height / 1.85),
        LabelPosition::Fixed => Point::new(p.rightmost.x, p.plot_top - 10.0),
        LabelPosition::Follow => p.rightmost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ushaped_is_smallest_in_the_middle() {
        let f = |v| font_size(DynamicLabelSize::UShaped, LabelPosition::Follow, v);
        assert_eq!(f(0.0), f(100.0));
        assert!(f(0.0) > f(50.0));
        assert_eq!(f(50.0), LABEL_FONT_MIN_SIZE);
        assert_eq!(f(100.0), LABEL_FONT_MAX_SIZE);
    }

    #[test]
    fn linear_is_monotonic() {
        let mut prev = f32::MIN;
        for v in 0..=100 {
            let s = font_size(DynamicLabelSize::Linear, LabelPosition::Fixed, v as f64);
            assert!(s >= prev);
            prev = s;
        }
        assert_eq!(font_size(DynamicLabelSize::Linear, LabelPosition::Fixed, 0.0), LABEL_FONT_MIN_SIZE);
    }

    #[test]
    fn none_is_constant_and_side_overrides() {
        for v in [0.0, 33.0, 100.0] {
            assert_eq!(font_size(DynamicLabelSize::None, LabelPosition::Follow, v), LABEL_FONT_DEFAULT_SIZE);
            assert_eq!(font_size(DynamicLabelSize::UShaped, LabelPosition::Side, v), LABEL_FONT_SIDE_SIZE);
        }
    }

    #[test]
    fn formats_integers_without_fraction() {
        assert_eq!(format_value(52.0), "52");
        assert_eq!(format_value(57.25), "57.25");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn anchors_by_position() {
        let p = Placement {
            chart_width: 575.0,
            chart_height: 370.0,
            info_width: 125.0,
            plot_top: 40.0,
            rightmost: Point::new(500.0, 120.0),
        };
        assert_eq!(anchor(LabelPosition::Follow, &p), Point::new(500.0, 120.0));
        assert_eq!(anchor(LabelPosition::Fixed, &p), Point::new(500.0, 30.0));
        let side = anchor(LabelPosition::Side, &p);
        assert_eq!(side.x, 627.5);
        assert!((side.y - 200.0).abs() < 1e-3);
    }
}
