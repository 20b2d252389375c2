use std::hint::black_box;

use ascii_mandelbrot::{
    generate_cell_buffer, generate_fractal, MandelbrotAlgorithm, MandelbrotConfig,
    MandelbrotGlyphMap, PixelRect, ViewWindow,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn window(width: u32, height: u32) -> ViewWindow {
    ViewWindow::new(
        MandelbrotConfig::default().region,
        PixelRect::new(width, height).expect("bench grid is non-empty"),
    )
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let glyph_map = MandelbrotGlyphMap::default();

    for (width, height) in [(80, 24), (200, 60)] {
        let window = window(width, height);
        let algorithm = MandelbrotAlgorithm::new(&window);

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}x{}", width, height)),
            &algorithm,
            |b, algorithm| {
                b.iter(|| {
                    let classifications =
                        generate_fractal(window.pixel_rect(), black_box(algorithm)).unwrap();
                    generate_cell_buffer(classifications, &glyph_map, window.pixel_rect()).unwrap()
                })
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("rayon", format!("{}x{}", width, height)),
            &algorithm,
            |b, algorithm| {
                b.iter(|| {
                    let classifications = ascii_mandelbrot::generate_fractal_rayon(
                        window.pixel_rect(),
                        black_box(algorithm),
                    )
                    .unwrap();
                    generate_cell_buffer(classifications, &glyph_map, window.pixel_rect()).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
