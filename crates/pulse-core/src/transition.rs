// File: crates/pulse-core/src/transition.rs
// Summary: Per-property transition state machine driven by frame timestamps.
//
// A scheduled transition starts on the next `advance`, from whatever value the
// property shows at that moment. Scheduling again replaces the pending or
// running transition in place.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Polynomial in-out with exponent 3.
    CubicInOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` to progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2.powi(3) / 2.0
                } else {
                    (2.0 - (2.0 - t2).powi(3)) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionState {
    Idle,
    Pending { target: f64, duration: Duration, easing: Easing },
    Running { from: f64, target: f64, start: Duration, duration: Duration, easing: Easing },
}

/// A single animated scalar (a translation, a position), kept in f64 so
/// large scroll offsets stay exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated {
    value: f64,
    state: TransitionState,
}

impl Animated {
    pub fn new(value: f64) -> Self {
        Self { value, state: TransitionState::Idle }
    }

    /// Value as of the last `advance`.
    pub fn value(&self) -> f64 { self.value }

    /// Value the property is heading to.
    pub fn target(&self) -> f64 {
        match self.state {
            TransitionState::Idle => self.value,
            TransitionState::Pending { target, .. } | TransitionState::Running { target, .. } => target,
        }
    }

    pub fn state(&self) -> TransitionState { self.state }

    pub fn is_idle(&self) -> bool { matches!(self.state, TransitionState::Idle) }

    /// Replace any pending or running transition with one towards `target`.
    pub fn schedule(&mut self, target: f64, duration: Duration, easing: Easing) {
        self.state = TransitionState::Pending { target, duration, easing };
    }

    /// Move to time `now`. Returns true while a transition is still in flight.
    pub fn advance(&mut self, now: Duration) -> bool {
        if let TransitionState::Pending { target, duration, easing } = self.state {
            self.state = TransitionState::Running { from: self.value, target, start: now, duration, easing };
        }
        let TransitionState::Running { from, target, start, duration, easing } = self.state else {
            return false;
        };
        let t = if duration.is_zero() {
            1.0
        } else {
            now.saturating_sub(start).as_secs_f64() / duration.as_secs_f64()
        };
        if t >= 1.0 {
            self.value = target;
            self.state = TransitionState::Idle;
            return false;
        }
        self.value = from + (target - from) * easing.apply(t);
        true
    }
}
