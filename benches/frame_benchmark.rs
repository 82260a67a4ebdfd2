//! Frame benchmark: Measure full-frame render and blit cost.
//!
//! Target: well under the 20ms default tick for an 800×800 panel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raycaster::{
    build_scene, draw_scene, DrawPipeline, DrawStyle, MemoryHost, PixelBuffer, Position,
    RenderState, Size, WindowHost,
};

fn compose_frame(c: &mut Criterion) {
    let scene = build_scene();
    let style = DrawStyle::default();
    let mut buffer = PixelBuffer::try_new(Size::new(800, 800)).unwrap();

    c.bench_function("compose_800x800", |b| {
        b.iter(|| {
            draw_scene(
                black_box(&mut buffer),
                black_box(Position::new(150.0, 150.0)),
                &scene,
                &style,
            );
        });
    });
}

fn render_and_blit(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for edge in [200u32, 800, 1600] {
        let size = Size::new(edge, edge);
        let mut host = MemoryHost::new(size);
        host.create_panel().unwrap();
        let mut state = RenderState::new(build_scene(), size).unwrap();
        let mut pipeline = DrawPipeline::default();

        group.bench_with_input(BenchmarkId::from_parameter(edge), &edge, |b, _| {
            b.iter(|| pipeline.render_frame(black_box(&mut state), &mut host).unwrap());
        });
    }

    group.finish();
}

fn blit_only(c: &mut Criterion) {
    let size = Size::new(800, 800);
    let mut host = MemoryHost::new(size);
    host.create_panel().unwrap();
    let mut state = RenderState::new(build_scene(), size).unwrap();
    let mut pipeline = DrawPipeline::default();
    pipeline.render_frame(&mut state, &mut host).unwrap();

    c.bench_function("blit_only_800x800", |b| {
        b.iter(|| pipeline.blit_only(black_box(&state), &mut host).unwrap());
    });
}

criterion_group!(benches, compose_frame, render_and_blit, blit_only);
criterion_main!(benches);
