// File: crates/pulse-core/src/scale.rs
// Summary: Linear and piecewise-linear scales mapping data domains to pixel (or size) ranges.

/// Continuous linear map from `domain` to `range`. Extrapolates outside the
/// domain; never clamps. Works in f64 end to end: x positions on long series
/// run far past the plot and only become f32 once made relative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain span, kept away from zero so degenerate domains map to `range.0`.
    #[inline]
    fn span(&self) -> f64 {
        let s = self.domain.1 - self.domain.0;
        if s.abs() < 1e-12 { 1e-12_f64.copysign(s) } else { s }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let t = (v - self.domain.0) / self.span();
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let r = self.range.1 - self.range.0;
        if r.abs() < f64::EPSILON {
            return self.domain.0;
        }
        self.domain.0 + ((px - self.range.0) / r) * self.span()
    }

    /// Pixels covered by one domain unit.
    pub fn px_per_unit(&self) -> f64 {
        (self.range.1 - self.range.0) / self.span()
    }
}

/// Polylinear scale over three stops, e.g. `[0, 50, 100] -> [28, 14, 28]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecewiseScale {
    pub domain: [f64; 3],
    pub range: [f32; 3],
}

impl PiecewiseScale {
    pub fn new(domain: [f64; 3], range: [f32; 3]) -> Self {
        Self { domain, range }
    }

    /// Segment choice follows the stop the value lies below; values outside
    /// the domain extrapolate along the outer segments.
    pub fn map(&self, v: f64) -> f32 {
        let [d0, d1, d2] = self.domain;
        let [r0, r1, r2] = self.range;
        let (lo, hi) = if v < d1 { ((d0, d1), (r0, r1)) } else { ((d1, d2), (r1, r2)) };
        LinearScale::new(lo, (hi.0 as f64, hi.1 as f64)).to_px(v) as f32
    }
}
