//! Benchmarks for the Epithet adjective engine.
//!
//! Run with: cargo bench -p epithet-core

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use epithet_core::config::Config;
use epithet_core::lexicon::{learn_text, Vocabulary, WordExtractor};
use epithet_core::{AnalyzeOptions, Epithet, Photo};

const CAPTION: &str = "A magnificent, extraordinary, and phenomenal photograph of a misty \
    harbor at sunrise, with weathered boats drifting past towering, sunlit cliffs";

fn sample_photo(id: usize) -> Photo {
    Photo::new(format!("photo-{id}"))
        .with_title("Golden Sunset over the river")
        .with_description(CAPTION)
        .with_tags(["rustic", "coastal", "dreamy"])
}

fn seeded_engine() -> Epithet {
    let mut config = Config::default();
    config.selection.seed = Some(7);
    Epithet::new(config)
}

fn benchmark_extract(c: &mut Criterion) {
    c.bench_function("extract_caption", |b| {
        b.iter(|| WordExtractor::extract(black_box(CAPTION)))
    });
}

fn benchmark_learn(c: &mut Criterion) {
    c.bench_function("learn_caption", |b| {
        b.iter_batched(
            Vocabulary::new,
            |mut vocab| learn_text(&mut vocab, black_box(CAPTION), "description"),
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_analyze(c: &mut Criterion) {
    let epithet = seeded_engine();
    let options = AnalyzeOptions::default();
    let photo = sample_photo(0);

    c.bench_function("analyze_photo", |b| {
        b.iter(|| epithet.analyze(black_box(&photo), &options))
    });
}

fn benchmark_analyze_batch(c: &mut Criterion) {
    let options = AnalyzeOptions::default();
    let photos: Vec<Photo> = (0..100).map(sample_photo).collect();

    c.bench_function("analyze_batch_100", |b| {
        b.iter_batched(
            seeded_engine,
            |epithet| epithet.analyze_batch(black_box(&photos), &options),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    benchmark_extract,
    benchmark_learn,
    benchmark_analyze,
    benchmark_analyze_batch
);
criterion_main!(benches);
