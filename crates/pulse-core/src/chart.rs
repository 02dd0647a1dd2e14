// File: crates/pulse-core/src/chart.rs
// Summary: ChartInstance: scales, label logic and animated view over one series, emitting a Scene per frame.

use std::time::Duration;

use tracing::debug;

use crate::axis::{y_ticks, Tick, XAxisSpec};
use crate::config::{ChartConfig, LabelPosition};
use crate::error::ChartError;
use crate::geometry::{Point, Rect};
use crate::label::{self, Placement};
use crate::scale::LinearScale;
use crate::scene::{HAlign, Layer, Scene, Shape, VAlign};
use crate::series::Series;
use crate::theme::Theme;
use crate::threshold::classify;
use crate::transition::Easing;
use crate::types::{
    Insets, AXIS_FONT_SIZE, AXIS_TICK_SIZE, LABEL_CORNER_RADIUS, LABEL_TEXT_PADDING, LINE_WIDTH, POINT_RADIUS,
    TITLE_FONT_SIZE, VALUE_DOMAIN, X_AXIS_LEFT_MARGIN, X_AXIS_RIGHT_MARGIN,
};
use crate::view::ViewState;

/// Length of the end ticks d3-style axes draw on their domain line.
const OUTER_TICK_SIZE: f32 = 6.0;
/// Gap between a tick and its text.
const TICK_LABEL_GAP: f32 = 3.0;

/// A scrolling line chart over one series.
pub struct ChartInstance {
    title: String,
    series: Series,
    config: ChartConfig,
    theme: Theme,
    padding: Insets,
    x: LinearScale,
    y: LinearScale,
    x_axis: XAxisSpec,
    view: ViewState,
}

impl ChartInstance {
    /// Validate `config` against `series` and lay out the chart at step 1.
    pub fn new(series: Series, title: impl Into<String>, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate(series.len())?;
        if let Some(index) = series.first_non_finite() {
            return Err(ChartError::NonFiniteValue { index });
        }
        let title = title.into();
        let padding = Insets::default();
        let len = series.len() as f64;
        let view_range = config.view_range as f64;

        let chart_w = config.chart_width() as f64;
        let chart_h = config.height as f64;
        let plot_w = chart_w - padding.hsum() as f64;
        let left = padding.left as f64;
        let span_px = plot_w / (view_range - X_AXIS_LEFT_MARGIN + X_AXIS_RIGHT_MARGIN)
            * (len - X_AXIS_LEFT_MARGIN + X_AXIS_RIGHT_MARGIN);
        let x = LinearScale::new((1.0 - X_AXIS_LEFT_MARGIN, len + X_AXIS_RIGHT_MARGIN), (left, left + span_px));
        let y = LinearScale::new(VALUE_DOMAIN, (chart_h - padding.bottom as f64, padding.top as f64));

        let x_axis = XAxisSpec {
            series_len: series.len(),
            view_range: config.view_range,
            show_labels: config.show_x_axis_ticks,
            inverse_static: config.x_axis_inverse_static,
        };

        let mut chart = Self {
            title,
            series,
            config,
            theme: Theme::default(),
            padding,
            x,
            y,
            x_axis,
            view: ViewState::new(f64::NAN, Point::default()),
        };
        let value = chart.label_value_at(0);
        let right = chart.rightmost_point(0);
        let anchor = label::anchor(chart.config.label_position, &chart.placement(right));
        chart.view = ViewState::new(value, anchor);
        debug!(
            title = %chart.title,
            samples = chart.series.len(),
            view_range = chart.config.view_range,
            "chart created"
        );
        Ok(chart)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn series(&self) -> &Series { &self.series }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn x_scale(&self) -> &LinearScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn current_index(&self) -> usize { self.view.current_index }
    pub fn label_value(&self) -> f64 { self.view.label_value }
    pub fn label_text(&self) -> String { label::format_value(self.view.label_value) }

    /// Pixels between two consecutive samples.
    pub fn tick_gap(&self) -> f64 { self.x.px_per_unit() }

    pub fn label_font_size(&self) -> f32 {
        label::font_size(self.config.dynamic_label_size, self.config.label_position, self.view.label_value)
    }

    /// Largest index that still shows a full window.
    pub fn max_index(&self) -> usize {
        self.series.len() - self.config.view_range
    }

    /// Plotting area in chart pixels.
    pub fn plot_rect(&self) -> Rect {
        let chart_w = self.config.chart_width() as f32;
        let chart_h = self.config.height as f32;
        Rect::from_ltrb(
            self.padding.left as f32,
            self.padding.top as f32,
            chart_w - self.padding.right as f32,
            chart_h - self.padding.bottom as f32,
        )
    }

    /// Scroll to `step` (1-based). Steps past the data clamp to the last full window.
    pub fn update(&mut self, step: u64, duration: Duration) {
        let requested = usize::try_from(step.saturating_sub(1)).unwrap_or(usize::MAX);
        let index = requested.min(self.max_index());
        if index != requested {
            debug!(title = %self.title, step, index, "step past end of series; clamped");
        }
        let easing = if self.config.ease_in_out { Easing::CubicInOut } else { Easing::Linear };
        let value = self.label_value_at(index);
        self.view.label_value = value;
        self.view.scroll_to(index, self.tick_gap(), duration, easing);
        if self.config.label_position == LabelPosition::Follow {
            self.view.label_y.schedule(self.y.to_px(value), duration, easing);
        }
    }

    /// Responsive layout is not supported; the chart keeps its creation size.
    pub fn resize(&mut self) {}

    /// Drive transitions to `now`; true while anything is still moving.
    pub fn advance(&mut self, now: Duration) -> bool {
        self.view.advance(now)
    }

    fn rightmost_index(&self, current_index: usize) -> usize {
        current_index + self.config.view_range - 1
    }

    fn label_value_at(&self, current_index: usize) -> f64 {
        let right = self.rightmost_index(current_index);
        let value = if self.config.use_rolling_average {
            self.series.rolling_average(right, self.config.rolling_average_window)
        } else {
            self.series.get(right).map(|s| s.value)
        };
        value.unwrap_or(f64::NAN)
    }

    fn rightmost_point(&self, current_index: usize) -> Point {
        let right = self.rightmost_index(current_index);
        match self.series.get(right) {
            Some(s) => Point::new(
                self.x.to_px(s.index as f64) as f32,
                self.y.to_px(self.label_value_at(current_index)) as f32,
            ),
            None => Point::new(f32::NAN, f32::NAN),
        }
    }

    fn placement(&self, rightmost: Point) -> Placement {
        Placement {
            chart_width: self.config.chart_width() as f32,
            chart_height: self.config.height as f32,
            info_width: self.config.info_width() as f32,
            plot_top: self.y.range.1 as f32,
            rightmost,
        }
    }

    /// Draw list for the current frame.
    pub fn scene(&self) -> Scene {
        let t = &self.theme;
        let plot = self.plot_rect();
        let chart_h = self.config.height as f32;
        let label_class = classify(self.view.label_value);

        let mut back = Layer::new();
        if self.config.background_encoding {
            back.push(Shape::Rect { rect: plot, color: t.background_color(label_class, true) });
        }
        for tick in y_ticks() {
            let y = self.y.to_px(tick.value) as f32;
            back.push(Shape::Line {
                from: Point::new(plot.left, y),
                to: Point::new(plot.right, y),
                color: t.grid,
                width: 1.0,
            });
        }
        for v in self.x_axis.grid_values() {
            let x = self.x.to_px(v) as f32;
            back.push(Shape::Line {
                from: Point::new(x, plot.top),
                to: Point::new(x, plot.bottom),
                color: t.grid,
                width: 1.0,
            });
        }
        back.push(Shape::Text {
            text: self.title.clone(),
            at: Point::new(self.config.width as f32 / 2.0, self.padding.top as f32 / 2.0 - 0.4 * TITLE_FONT_SIZE),
            size: TITLE_FONT_SIZE,
            color: t.title,
            halign: HAlign::Center,
            valign: VAlign::Top,
        });

        let window = self.window(self.view.translate_x.value());
        let mut moving = Layer::clipped(Rect::from_ltwh(plot.left, 0.0, plot.width(), chart_h));
        moving.offset_x = window.offset as f32;
        if !self.config.x_axis_inverse_static {
            self.push_x_axis(&mut moving, plot.bottom, &window);
        }
        let samples = &self.series.samples()[window.first - 1..window.last];
        let points = samples
            .iter()
            .map(|s| Point::new((self.x.to_px(s.index as f64) + window.origin) as f32, self.y.to_px(s.value) as f32))
            .collect::<Vec<_>>();
        let markers = points
            .iter()
            .zip(samples)
            .map(|(p, s)| Shape::Circle {
                center: *p,
                radius: POINT_RADIUS,
                color: t.threshold_color(classify(s.value), self.config.show_threshold),
            })
            .collect::<Vec<_>>();
        moving.push(Shape::Polyline { points, color: t.line_stroke, width: LINE_WIDTH });
        moving.shapes.extend(markers);

        let mut layers = vec![back, moving];
        if self.config.x_axis_inverse_static {
            let mut fixed = Layer::clipped(Rect::from_ltwh(plot.left - 10.0, -10.0, plot.width() + 10.0, chart_h + 10.0));
            self.push_x_axis(&mut fixed, plot.bottom, &self.window(0.0));
            layers.push(fixed);
        }

        let mut axes = Layer::new();
        self.push_y_axis(&mut axes, plot.left);
        layers.push(axes);

        let side = self.config.label_position == LabelPosition::Side;
        let mut label_layer = Layer::new();
        label_layer.push(Shape::Label {
            text: self.label_text(),
            center: self.view.label_anchor(),
            size: self.label_font_size(),
            color: if side { t.side_label_text } else { t.label_text },
            background: (!side).then(|| t.threshold_color(label_class, self.config.show_threshold)),
            padding: LABEL_TEXT_PADDING,
            corner_radius: LABEL_CORNER_RADIUS,
        });
        layers.push(label_layer);

        Scene { width: self.config.width, height: self.config.height, background: t.background, layers }
    }

    /// Samples on screen at translation `shown`, plus one past each edge.
    fn window(&self, shown: f64) -> Window {
        let gap = self.tick_gap();
        let steps = if gap > 0.0 { (-shown / gap).max(0.0).floor() } else { 0.0 };
        let origin = -gap * steps;
        let k = steps as usize;
        let len = self.series.len();
        Window {
            origin,
            offset: shown - origin,
            first: k.clamp(1, len),
            last: k.saturating_add(self.config.view_range + 2).min(len),
        }
    }

    fn push_x_axis(&self, layer: &mut Layer, axis_y: f32, window: &Window) {
        let t = &self.theme;
        let plot = self.plot_rect();
        let slack = self.tick_gap();
        let (lo, hi) = (plot.left as f64 - slack, plot.right as f64 + slack);
        let (x0, x1) = (self.x.range.0 + window.origin, self.x.range.1 + window.origin);
        let ends = (x0 >= lo, x1 <= hi);
        let (x0, x1) = (x0.max(lo) as f32, x1.min(hi) as f32);
        push_domain(layer, Point::new(x0, axis_y), Point::new(x1, axis_y), (0.0, OUTER_TICK_SIZE), ends, t.axis_line);
        let tick_size = if self.config.show_x_axis_ticks { AXIS_TICK_SIZE } else { 0.0 };
        for Tick { value, label } in self.x_axis.ticks_between(window.first as u64, window.last as u64) {
            let x = (self.x.to_px(value) + window.origin) as f32;
            if tick_size > 0.0 {
                layer.push(Shape::Line {
                    from: Point::new(x, axis_y),
                    to: Point::new(x, axis_y + tick_size),
                    color: t.axis_line,
                    width: 1.0,
                });
            }
            if let Some(text) = label {
                layer.push(Shape::Text {
                    text,
                    at: Point::new(x, axis_y + tick_size + TICK_LABEL_GAP),
                    size: AXIS_FONT_SIZE,
                    color: t.axis_label,
                    halign: HAlign::Center,
                    valign: VAlign::Top,
                });
            }
        }
    }

    fn push_y_axis(&self, layer: &mut Layer, axis_x: f32) {
        let t = &self.theme;
        let (y0, y1) = (self.y.range.0 as f32, self.y.range.1 as f32);
        push_domain(layer, Point::new(axis_x, y0), Point::new(axis_x, y1), (-OUTER_TICK_SIZE, 0.0), (true, true), t.axis_line);
        for Tick { value, label } in y_ticks() {
            let y = self.y.to_px(value) as f32;
            layer.push(Shape::Line {
                from: Point::new(axis_x - AXIS_TICK_SIZE, y),
                to: Point::new(axis_x, y),
                color: t.axis_line,
                width: 1.0,
            });
            if let Some(text) = label {
                layer.push(Shape::Text {
                    text,
                    at: Point::new(axis_x - AXIS_TICK_SIZE - TICK_LABEL_GAP, y),
                    size: AXIS_FONT_SIZE,
                    color: t.axis_label,
                    halign: HAlign::Right,
                    valign: VAlign::Middle,
                });
            }
        }
    }
}

/// Slice of the series drawn in the moving layer.
///
/// Sample positions are shifted by `origin`, a whole number of tick gaps, so
/// the layer only carries the sub-gap remainder as `offset` and every f32
/// coordinate stays near the plot however far the chart has scrolled.
struct Window {
    origin: f64,
    offset: f64,
    /// 1-based, inclusive.
    first: usize,
    last: usize,
}

/// Domain line offset by `(dx, dy)` at each end flagged in `ends`.
fn push_domain(
    layer: &mut Layer,
    from: Point,
    to: Point,
    outer: (f32, f32),
    ends: (bool, bool),
    color: crate::theme::Color,
) {
    let (dx, dy) = outer;
    let mut points = Vec::with_capacity(4);
    if ends.0 {
        points.push(Point::new(from.x + dx, from.y + dy));
    }
    points.extend([from, to]);
    if ends.1 {
        points.push(Point::new(to.x + dx, to.y + dy));
    }
    layer.push(Shape::Polyline { points, color, width: 1.0 });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DynamicLabelSize;

    fn ramp(n: usize) -> Series {
        Series::from_values((1..=n).map(|i| i as f64 * 10.0))
    }

    fn chart(series: Series, config: ChartConfig) -> ChartInstance {
        ChartInstance::new(series, "Machine 1", config).expect("valid chart")
    }

    #[test]
    fn x_scale_fills_plot_with_first_view() {
        for (len, view) in [(10, 5), (50, 10), (200, 120), (7, 7)] {
            let c = chart(Series::from_values(vec![50.0; len]), ChartConfig { view_range: view, rolling_average_window: 1, ..Default::default() });
            let plot = c.plot_rect();
            let left = c.x_scale().to_px(1.0 - X_AXIS_LEFT_MARGIN);
            let right = c.x_scale().to_px(view as f64 + X_AXIS_RIGHT_MARGIN);
            assert!((left - plot.left as f64).abs() < 1e-2, "len={len} view={view}");
            assert!((right - plot.right as f64).abs() < 1e-2, "len={len} view={view}");
            let gap = c.tick_gap();
            let first_to_last = c.x_scale().to_px(view as f64) - c.x_scale().to_px(1.0);
            assert!((first_to_last - gap * (view as f64 - 1.0)).abs() < 1e-2);
        }
    }

    #[test]
    fn y_scale_is_inverted() {
        let c = chart(ramp(10), ChartConfig::default());
        assert_eq!(c.y_scale().to_px(0.0), 370.0);
        assert_eq!(c.y_scale().to_px(100.0), 40.0);
    }

    #[test]
    fn initial_label_is_rightmost_value() {
        let c = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() });
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.label_value(), 50.0);
        assert_eq!(c.label_text(), "50");
    }

    #[test]
    fn initial_label_uses_rolling_average() {
        let c = chart(
            ramp(10),
            ChartConfig { view_range: 5, rolling_average_window: 3, use_rolling_average: true, ..Default::default() },
        );
        // 30, 40, 50
        assert_eq!(c.label_value(), 40.0);
    }

    #[test]
    fn update_sets_index_from_step_not_history() {
        let mut a = chart(ramp(30), ChartConfig::default());
        let mut b = chart(ramp(30), ChartConfig::default());
        a.update(3, Duration::ZERO);
        a.update(9, Duration::ZERO);
        b.update(9, Duration::ZERO);
        assert_eq!(a.current_index(), 8);
        assert_eq!(a.current_index(), b.current_index());
        assert_eq!(a.label_value(), b.label_value());
        assert_eq!(a.view().translate_x.target(), b.view().translate_x.target());
        a.update(2, Duration::ZERO);
        assert_eq!(a.current_index(), 1);
    }

    #[test]
    fn update_clamps_past_the_end() {
        let mut c = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() });
        c.update(40, Duration::ZERO);
        assert_eq!(c.current_index(), 5);
        assert_eq!(c.label_value(), 100.0);
        c.update(0, Duration::ZERO);
        assert_eq!(c.current_index(), 0);
        c.update(u64::MAX, Duration::ZERO);
        assert_eq!(c.current_index(), 5);
    }

    #[test]
    fn follow_label_tracks_value() {
        let mut c = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() });
        let start = c.view().label_anchor();
        assert_eq!(start.y, c.y_scale().to_px(50.0) as f32);
        c.update(3, Duration::from_millis(500));
        assert_eq!(c.view().label_target().y, c.y_scale().to_px(70.0) as f32);
        assert_eq!(c.view().label_target().x, start.x);
        c.advance(Duration::from_millis(0));
        c.advance(Duration::from_millis(500));
        assert_eq!(c.view().label_anchor().y, c.y_scale().to_px(70.0) as f32);
    }

    #[test]
    fn fixed_and_side_labels_do_not_move() {
        for pos in [LabelPosition::Fixed, LabelPosition::Side] {
            let mut c = chart(ramp(10), ChartConfig { view_range: 5, label_position: pos, ..Default::default() });
            let before = c.view().label_anchor();
            c.update(4, Duration::ZERO);
            c.advance(Duration::ZERO);
            assert_eq!(c.view().label_anchor(), before);
            assert_eq!(c.label_value(), 80.0);
        }
        let fixed = chart(ramp(10), ChartConfig { view_range: 5, label_position: LabelPosition::Fixed, ..Default::default() });
        assert_eq!(fixed.view().label_anchor().y, 30.0);
    }

    #[test]
    fn easing_follows_config() {
        let mut c = chart(ramp(10), ChartConfig { view_range: 5, ease_in_out: true, ..Default::default() });
        c.update(2, Duration::from_millis(100));
        c.advance(Duration::ZERO);
        c.advance(Duration::from_millis(25));
        let eased = c.view().translate_x.value();
        let linear_quarter = -c.tick_gap() * 0.25;
        assert!(eased > linear_quarter, "cubic in-out lags linear early on");
    }

    #[test]
    fn font_size_follows_label_value() {
        let mut c = chart(
            ramp(10),
            ChartConfig { view_range: 5, dynamic_label_size: DynamicLabelSize::Linear, ..Default::default() },
        );
        let small = c.label_font_size();
        c.update(6, Duration::ZERO);
        assert!(c.label_font_size() > small);
        assert_eq!(c.label_font_size(), 28.0);
    }

    #[test]
    fn resize_is_a_no_op() {
        let mut c = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() });
        let before = c.scene();
        c.resize();
        assert_eq!(c.scene(), before);
    }

    #[test]
    fn rejects_invalid_input() {
        let bad = ChartInstance::new(ramp(4), "x", ChartConfig::default());
        assert!(matches!(bad, Err(ChartError::ViewRangeExceedsSeries { .. })));
        let nan = ChartInstance::new(
            Series::from_values([1.0, f64::NAN, 3.0]),
            "x",
            ChartConfig { view_range: 2, rolling_average_window: 1, ..Default::default() },
        );
        assert_eq!(nan.err(), Some(ChartError::NonFiniteValue { index: 1 }));
    }

    #[test]
    fn scene_label_box_uses_threshold_color() {
        let c = chart(ramp(10), ChartConfig { view_range: 8, ..Default::default() });
        let theme = Theme::light();
        match c.scene().label() {
            Some(Shape::Label { text, background, .. }) => {
                assert_eq!(text, "80");
                assert_eq!(*background, Some(theme.high));
            }
            other => panic!("unexpected label {other:?}"),
        }
        let side = chart(ramp(10), ChartConfig { view_range: 8, label_position: LabelPosition::Side, ..Default::default() });
        assert!(matches!(side.scene().label(), Some(Shape::Label { background: None, size, .. }) if *size == 74.0));
    }

    #[test]
    fn scene_moving_layer_carries_translation() {
        let mut c = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() });
        c.update(3, Duration::ZERO);
        c.advance(Duration::ZERO);
        let scene = c.scene();
        let moving = &scene.layers[1];
        assert_eq!(moving.offset_x, 0.0);
        assert_eq!(moving.clip, Some(Rect::from_ltwh(40.0, 0.0, 640.0, 400.0)));
        // samples 2..=9: one either side of the five on screen
        let centers = circle_xs(moving);
        assert_eq!(centers.len(), 8);
        let third = c.x_scale().to_px(3.0) - 2.0 * c.tick_gap();
        assert!((centers[1] + moving.offset_x - third as f32).abs() < 1e-3);
    }

    fn circle_xs(layer: &Layer) -> Vec<f32> {
        layer
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle { center, .. } => Some(center.x),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mid_scroll_offset_stays_within_one_gap() {
        let mut c = chart(ramp(30), ChartConfig::default());
        c.update(7, Duration::from_millis(100));
        c.advance(Duration::ZERO);
        c.advance(Duration::from_millis(30));
        let shown = c.view().translate_x.value();
        let moving = &c.scene().layers[1];
        assert!(moving.offset_x <= 0.0 && (moving.offset_x as f64) > -c.tick_gap());
        let first = circle_xs(moving)[0] + moving.offset_x;
        let want = c.x_scale().to_px((-shown / c.tick_gap()).floor().max(1.0)) + shown;
        assert!((first as f64 - want).abs() < 1e-3);
    }

    #[test]
    fn newest_point_meets_label_on_long_series() {
        let n = 3_000_000;
        let mut c = chart(Series::from_values((0..n).map(|i| (i % 100) as f64)), ChartConfig::default());
        let label_x = c.view().label_anchor().x;
        c.update(n as u64 - 9, Duration::ZERO);
        c.advance(Duration::ZERO);
        assert_eq!(c.current_index(), c.max_index());
        let moving = &c.scene().layers[1];
        let newest = *circle_xs(moving).last().expect("points drawn") + moving.offset_x;
        assert!((newest - label_x).abs() < 1e-2, "newest {newest} label {label_x}");
        assert!(moving.shapes.len() < 100);
    }

    #[test]
    fn hidden_x_ticks_draw_only_the_domain() {
        let c = chart(ramp(10), ChartConfig { view_range: 5, show_x_axis_ticks: false, ..Default::default() });
        let scene = c.scene();
        let moving = &scene.layers[1];
        assert!(!moving.shapes.iter().any(|s| matches!(s, Shape::Text { .. } | Shape::Line { .. })));
        // domain line and series line
        let polylines = moving.shapes.iter().filter(|s| matches!(s, Shape::Polyline { .. })).count();
        assert_eq!(polylines, 2);
        let shown = chart(ramp(10), ChartConfig { view_range: 5, ..Default::default() }).scene();
        assert!(shown.layers[1].shapes.iter().any(|s| matches!(s, Shape::Text { text, .. } if text == "1")));
    }

    #[test]
    fn inverse_static_axis_stays_put() {
        let c = chart(ramp(10), ChartConfig { view_range: 5, x_axis_inverse_static: true, ..Default::default() });
        let scene = c.scene();
        // back, moving, static axis, y axis, label
        assert_eq!(scene.layers.len(), 5);
        assert_eq!(scene.layers[2].offset_x, 0.0);
        let has_text = |l: &Layer, want: &str| l.shapes.iter().any(|s| matches!(s, Shape::Text { text, .. } if text == want));
        assert!(has_text(&scene.layers[2], "-4"));
        assert!(!has_text(&scene.layers[1], "1"));
    }

    #[test]
    fn background_encoding_adds_tinted_plot() {
        let c = chart(ramp(10), ChartConfig { view_range: 2, rolling_average_window: 1, background_encoding: true, ..Default::default() });
        // rightmost value 20 -> low
        let first = &c.scene().layers[0].shapes[0];
        assert_eq!(first, &Shape::Rect { rect: c.plot_rect(), color: Theme::light().low_background });
    }
}
