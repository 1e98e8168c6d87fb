use cgmath::Vector2;
use criterion::{criterion_group, criterion_main, Criterion};

use rhombus_zoom::checkerboard::Checkerboard;
use rhombus_zoom::AnimationParameters;

pub fn transform(c: &mut Criterion) {
    let params = AnimationParameters::default();

    c.bench_function("transform", |b| {
        b.iter(|| params.transform(1.5, Vector2::new(1.0, -1.0)))
    });
}

pub fn checkerboard(c: &mut Criterion) {
    let board = Checkerboard::default();

    c.bench_function("checkerboard", |b| b.iter(|| board.to_rgb8()));
}

criterion_group!(benches, transform, checkerboard);
criterion_main!(benches);
