// File: crates/pulse-core/tests/driver.rs
// Purpose: Driver pushing shared steps to several real chart instances on simulated time.

use std::time::Duration;

use pulse_core::{AnimationDriver, ChartConfig, ChartInstance, Series, ANIM_DELAY, ANIM_DURATION};

fn machine(offset: f64) -> ChartInstance {
    let series = Series::from_values((0..40).map(|i| ((i as f64 * 7.0 + offset) % 100.0).round()));
    ChartInstance::new(series, format!("Machine {offset}"), ChartConfig::default()).expect("chart")
}

#[test]
fn all_charts_share_the_step() {
    let mut driver = AnimationDriver::new();
    for offset in [0.0, 13.0, 42.0] {
        driver.register(machine(offset));
    }
    driver.start(Duration::ZERO);
    assert_eq!(driver.advance(ANIM_DELAY * 2), 2);
    for chart in driver.instances() {
        assert_eq!(chart.current_index(), 1);
    }
    assert_eq!(driver.step(), 3);
}

#[test]
fn transitions_finish_between_ticks() {
    let mut driver = AnimationDriver::new();
    driver.register(machine(0.0));
    driver.start(Duration::ZERO);

    driver.advance(ANIM_DELAY);
    let gap = driver.instances()[0].tick_gap();
    // step 1 keeps index 0
    assert_eq!(driver.instances()[0].view().translate_x.value(), 0.0);

    driver.advance(ANIM_DELAY * 2);
    driver.advance(ANIM_DELAY * 2 + ANIM_DURATION / 2);
    let mid = driver.instances()[0].view().translate_x.value();
    assert!((mid + gap / 2.0).abs() < 1e-3, "mid = {mid}");

    driver.advance(ANIM_DELAY * 2 + ANIM_DURATION);
    assert_eq!(driver.instances()[0].view().translate_x.value(), -gap);
}

#[test]
fn stop_leaves_charts_where_they_are() {
    let mut driver = AnimationDriver::new();
    driver.register(machine(5.0));
    driver.start(Duration::ZERO);
    driver.advance(ANIM_DELAY * 3);
    driver.stop();
    let index = driver.instances()[0].current_index();
    driver.advance(ANIM_DELAY * 10);
    assert_eq!(driver.instances()[0].current_index(), index);
    // in-flight transition still landed
    assert_eq!(driver.instances()[0].view().translate_x.value(), -driver.instances()[0].tick_gap() * 2.0);
}

#[test]
fn long_runs_clamp_at_the_end() {
    let mut driver = AnimationDriver::new();
    driver.register(machine(1.0));
    driver.start(Duration::ZERO);
    driver.advance(ANIM_DELAY * 100);
    let chart = &driver.instances()[0];
    assert_eq!(chart.current_index(), chart.max_index());
    assert!(chart.label_value().is_finite());
}
