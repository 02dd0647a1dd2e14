// File: crates/pulse-core/src/driver.rs
// Summary: Animation driver: shared step counter and repeating timers pushing steps to registered charts.
//
// Time is injected as a monotonic `Duration` since an arbitrary origin, so the
// same driver runs on a wall clock or on simulated time.

use std::time::Duration;

use tracing::{debug, trace};

use crate::chart::ChartInstance;
use crate::types::{ANIM_DELAY, ANIM_DURATION};

/// Anything the driver can push steps to.
pub trait Animate {
    fn update(&mut self, step: u64, duration: Duration);
    fn resize(&mut self) {}
    /// Drive transitions to `now`; true while still moving.
    fn advance(&mut self, _now: Duration) -> bool { false }
}

impl Animate for ChartInstance {
    fn update(&mut self, step: u64, duration: Duration) {
        ChartInstance::update(self, step, duration)
    }
    fn resize(&mut self) {
        ChartInstance::resize(self)
    }
    fn advance(&mut self, now: Duration) -> bool {
        ChartInstance::advance(self, now)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Timer {
    next_fire: Duration,
}

pub struct AnimationDriver<A: Animate = ChartInstance> {
    instances: Vec<A>,
    step: u64,
    timers: Vec<Timer>,
    delay: Duration,
    duration: Duration,
}

impl<A: Animate> Default for AnimationDriver<A> {
    fn default() -> Self { Self::new() }
}

impl<A: Animate> AnimationDriver<A> {
    /// Ticks every 1500 ms with 500 ms transitions.
    pub fn new() -> Self {
        Self::with_timing(ANIM_DELAY, ANIM_DURATION)
    }

    /// Custom tick interval (at least 1 ms) and transition length.
    pub fn with_timing(delay: Duration, duration: Duration) -> Self {
        Self {
            instances: Vec::new(),
            step: 1,
            timers: Vec::new(),
            delay: delay.max(Duration::from_millis(1)),
            duration,
        }
    }

    /// Add an instance; returns its registration slot.
    pub fn register(&mut self, instance: A) -> usize {
        self.instances.push(instance);
        self.instances.len() - 1
    }

    pub fn instances(&self) -> &[A] { &self.instances }
    pub fn instances_mut(&mut self) -> &mut [A] { &mut self.instances }

    /// Step the next tick will push.
    pub fn step(&self) -> u64 { self.step }
    pub fn delay(&self) -> Duration { self.delay }
    pub fn is_running(&self) -> bool { !self.timers.is_empty() }
    /// Number of live timers; starting twice runs two.
    pub fn timer_count(&self) -> usize { self.timers.len() }

    /// Begin ticking every `delay`, first at `now + delay`. Not idempotent:
    /// each call adds another timer.
    pub fn start(&mut self, now: Duration) {
        self.timers.push(Timer { next_fire: now + self.delay });
        debug!(timers = self.timers.len(), delay_ms = self.delay.as_millis() as u64, "animation started");
    }

    /// Cancel all timers. In-flight transitions still finish on `advance`.
    pub fn stop(&mut self) {
        if !self.timers.is_empty() {
            debug!(step = self.step, "animation stopped");
        }
        self.timers.clear();
    }

    /// Push the current step to every instance in registration order, then count up.
    pub fn tick(&mut self) {
        trace!(step = self.step, instances = self.instances.len(), "tick");
        for inst in &mut self.instances {
            inst.update(self.step, self.duration);
        }
        self.step += 1;
    }

    /// Resize every instance.
    pub fn resize(&mut self) {
        for inst in &mut self.instances {
            inst.resize();
        }
    }

    /// Fire every timer tick due by `now` in time order, then move all
    /// transitions to `now`. Returns the number of ticks fired.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(slot) = self.next_due(now) {
            let at = self.timers[slot].next_fire;
            self.advance_instances(at);
            self.tick();
            self.advance_instances(at);
            self.timers[slot].next_fire = at + self.delay;
            fired += 1;
        }
        self.advance_instances(now);
        fired
    }

    fn next_due(&self, now: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.next_fire <= now)
            .min_by_key(|(_, t)| t.next_fire)
            .map(|(i, _)| i)
    }

    fn advance_instances(&mut self, now: Duration) {
        for inst in &mut self.instances {
            inst.advance(now);
        }
    }
}
