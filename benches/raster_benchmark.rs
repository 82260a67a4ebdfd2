//! Raster benchmark: Measure line and circle primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raycaster::{PixelBuffer, Rgb, Size};

fn lines(c: &mut Criterion) {
    let mut buffer = PixelBuffer::try_new(Size::new(800, 800)).unwrap();

    c.bench_function("line_diagonal_700", |b| {
        b.iter(|| buffer.draw_line(black_box((50, 50)), black_box((750, 750)), Rgb::WHITE));
    });

    c.bench_function("line_clipped", |b| {
        b.iter(|| {
            buffer.draw_line(
                black_box((-100_000, 400)),
                black_box((100_000, 401)),
                Rgb::WHITE,
            );
        });
    });
}

fn circles(c: &mut Criterion) {
    let mut buffer = PixelBuffer::try_new(Size::new(800, 800)).unwrap();

    c.bench_function("fill_circle_r5", |b| {
        b.iter(|| buffer.fill_circle(black_box((150, 150)), 5, Rgb::RED));
    });
}

fn clear(c: &mut Criterion) {
    let mut buffer = PixelBuffer::try_new(Size::new(800, 800)).unwrap();

    c.bench_function("clear_800x800", |b| {
        b.iter(|| buffer.clear(black_box(Rgb::BLACK)));
    });
}

criterion_group!(benches, lines, circles, clear);
criterion_main!(benches);
