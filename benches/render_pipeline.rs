use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use escape_explorer::{FractalEngine, RenderStrategy};
use std::hint::black_box;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn bench_mandelbrot_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot_render");

    for strategy in [RenderStrategy::Sequential, RenderStrategy::Rayon] {
        let mut engine = FractalEngine::new_mandelbrot(WIDTH, HEIGHT, 256)
            .expect("valid engine")
            .with_render_strategy(strategy);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{strategy:?}")),
            &strategy,
            |b, _| {
                b.iter(|| {
                    engine.render().expect("render should succeed");
                    black_box(engine.image_buffer());
                });
            },
        );
    }

    group.finish();
}

fn bench_julia_tick_and_render(c: &mut Criterion) {
    let mut engine =
        FractalEngine::new_julia(-0.8, 0.156, 1.5, WIDTH, HEIGHT).expect("valid engine");
    engine.set_attract(40.0, 200.0);

    c.bench_function("julia_tick_and_render", |b| {
        b.iter(|| {
            engine.tick();
            engine.render().expect("render should succeed");
            black_box(engine.image_buffer());
        });
    });
}

fn bench_deep_zoom(c: &mut Criterion) {
    c.bench_function("mandelbrot_deep_zoom_render", |b| {
        b.iter(|| {
            let mut engine =
                FractalEngine::new_mandelbrot(WIDTH, HEIGHT, 1024).expect("valid engine");
            for _ in 0..8 {
                engine
                    .zoom(f64::from(WIDTH) * 0.3, f64::from(HEIGHT) * 0.5, 2.0)
                    .expect("zoom should succeed");
            }
            engine.render().expect("render should succeed");
            black_box(engine.mid_r());
        });
    });
}

criterion_group!(
    benches,
    bench_mandelbrot_render,
    bench_julia_tick_and_render,
    bench_deep_zoom
);
criterion_main!(benches);
