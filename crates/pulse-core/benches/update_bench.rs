use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulse_core::{AnimationDriver, ChartConfig, ChartInstance, Series, ANIM_DELAY};

fn build_chart(n: usize, view_range: usize) -> ChartInstance {
    let series = Series::from_values((0..n).map(|i| 50.0 + (i as f64 * 0.05).sin() * 45.0));
    let config = ChartConfig { view_range, use_rolling_average: true, ..Default::default() };
    ChartInstance::new(series, "bench", config).expect("chart")
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_function(format!("build_{n}"), |b| {
            let chart = build_chart(n, 50);
            b.iter(|| black_box(chart.scene()));
        });
    }
    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    c.bench_function("driver_20_charts_100_ticks", |b| {
        b.iter(|| {
            let mut driver = AnimationDriver::new();
            for _ in 0..20 {
                driver.register(build_chart(200, 10));
            }
            driver.start(Duration::ZERO);
            black_box(driver.advance(ANIM_DELAY * 100));
        });
    });
}

criterion_group!(benches, bench_scene, bench_driver);
criterion_main!(benches);
