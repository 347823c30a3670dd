use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use plant_growth::segmentation::morphology::{close, open};
use plant_growth::{PlantMetrics, PlantSegmenter};

/// 512x512 frame with a leafy disc on brown soil and scattered specks
fn synthetic_plant() -> RgbImage {
    RgbImage::from_fn(512, 512, |x, y| {
        let dx = x as i32 - 256;
        let dy = y as i32 - 300;
        if dx * dx + dy * dy < 140 * 140 && (x + y) % 37 != 0 {
            Rgb([45, 170, 60])
        } else if (x * 7 + y * 13) % 211 == 0 {
            Rgb([60, 200, 80])
        } else {
            Rgb([110, 80, 50])
        }
    })
}

fn benchmark_segmentation(c: &mut Criterion) {
    let image = synthetic_plant();
    let segmenter = PlantSegmenter::new();

    c.bench_function("classify_512", |b| {
        b.iter(|| segmenter.classify(black_box(&image)))
    });

    let raw = segmenter.classify(&image);
    c.bench_function("close_open_512", |b| {
        b.iter(|| open(&close(black_box(&raw), segmenter.element()), segmenter.element()))
    });

    c.bench_function("measure_512", |b| {
        b.iter(|| PlantMetrics::from_mask(&segmenter.segment(black_box(&image))))
    });
}

criterion_group!(benches, benchmark_segmentation);
criterion_main!(benches);
