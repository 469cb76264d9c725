use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_touch::{
    Complex, GrayscaleGradient, PixelBuffer, RenderJob, ScreenPoint, ViewState, ViewportSize,
    escape_time, render_into,
};

fn bench_escape_time(c: &mut Criterion) {
    // A point that survives the whole budget: worst case per pixel.
    c.bench_function("escape_time_interior_1000", |b| {
        b.iter(|| {
            escape_time(
                black_box(Complex {
                    real: -0.1,
                    imag: 0.1,
                }),
                black_box(1_000),
            )
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let viewport = ViewportSize::new(320, 240);
    let view = ViewState::new(ScreenPoint::new(160.0, 120.0), 1.0);
    let job = RenderJob {
        view,
        max_iterations: 256,
        generation: 1,
    };

    c.bench_function("render_320x240_256iter", |b| {
        let mut buffer = PixelBuffer::new(viewport);
        b.iter(|| render_into(black_box(&job), &mut buffer, &GrayscaleGradient))
    });
}

criterion_group!(benches, bench_escape_time, bench_full_frame);
criterion_main!(benches);
