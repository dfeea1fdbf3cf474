use conway_term::{parse_plaintext, Config, DefaultGrid, LifeGrid, TerminalRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn bench_step_default(c: &mut Criterion) {
    let mut life = DefaultGrid::random(Some(SEED), FILL_RATE);
    c.bench_function("step_64x32", |b| b.iter(|| life.step()));
}

fn bench_step_large(c: &mut Criterion) {
    let mut life = LifeGrid::<512, 512>::random(Some(SEED), FILL_RATE);
    c.bench_function("step_512x512", |b| b.iter(|| life.step()));
}

fn bench_render(c: &mut Criterion) {
    let life = DefaultGrid::random(Some(SEED), FILL_RATE);
    let mut renderer = TerminalRenderer::new(std::io::sink());
    c.bench_function("render_64x32", |b| b.iter(|| renderer.render(black_box(&life))));
}

fn bench_parse(c: &mut Criterion) {
    let data = DefaultGrid::random(Some(SEED), FILL_RATE).to_string();
    c.bench_function("parse_plaintext_64x32", |b| {
        b.iter(|| parse_plaintext(black_box(data.as_bytes()), Config::WIDTH, Config::HEIGHT))
    });
}

criterion_group!(
    benches,
    bench_step_default,
    bench_step_large,
    bench_render,
    bench_parse,
);
criterion_main!(benches);
