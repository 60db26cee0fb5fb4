use carousel_testing::prelude::*;
use carousel_ui::compute_geometry;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use web_time::Duration;

const ITEM_WIDTH: f32 = 320.0;
const VIEWPORT_WIDTH: f32 = 1080.0;
const ITEM_COUNT_SAMPLES: &[usize] = &[8, 64, 512];
/// Pointer moves reported per drag, roughly one second of 120Hz input.
const MOVES_PER_DRAG: usize = 120;

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_geometry");
    for &items in ITEM_COUNT_SAMPLES {
        let bounds = uniform_row(items, ITEM_WIDTH);
        group.bench_with_input(BenchmarkId::new("items", items), &bounds, |b, bounds| {
            b.iter(|| black_box(compute_geometry(bounds, VIEWPORT_WIDTH)));
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_drag");
    for &items in ITEM_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("items", items), &items, |b, &items| {
            let mut robot = CarouselRobot::new(items, ITEM_WIDTH, VIEWPORT_WIDTH);
            b.iter(|| {
                robot.press(600.0);
                for step in 0..MOVES_PER_DRAG {
                    robot.move_to(600.0 - step as f32);
                }
                let update = robot.release(600.0 - MOVES_PER_DRAG as f32);
                // Wrap so every iteration pages forward.
                if robot.carousel().active_index().next.is_none() {
                    robot.carousel().focus_item(0);
                }
                black_box(update)
            });
        });
    }
    group.finish();
}

fn bench_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_relayout");
    for &items in ITEM_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("items", items), &items, |b, &items| {
            let mut robot = CarouselRobot::new(items, ITEM_WIDTH, VIEWPORT_WIDTH);
            let mut wide = false;
            b.iter(|| {
                wide = !wide;
                robot.resize(if wide { 1920.0 } else { VIEWPORT_WIDTH });
                black_box(robot.advance_time(Duration::from_secs(1)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_drag, bench_relayout);
criterion_main!(benches);
