/// N-gram Generation Benchmarks
///
/// Measures tokenizer throughput and the cost of each generator and bag
/// over a synthetic corpus with a small, repetitive vocabulary.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ngrams::sequence::{bag_of_ngrams, bag_of_skipgrams, ngrams, skipgrams, CaseMode, OrderPolicy};
use ngrams::tokenizer::tokenize;
use std::time::Duration;

const VERSE: &str = "Turning and turning in the widening gyre \
    The falcon cannot hear the falconer; \
    Things fall apart; the centre cannot hold; \
    Mere anarchy is loosed upon the world, ";

fn corpus(repeats: usize) -> String {
    VERSE.repeat(repeats)
}

/// Benchmark: Tokenizer over growing inputs
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for repeats in [1, 10, 100].iter() {
        let text = corpus(*repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| tokenize(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark: Contiguous n-grams for several sizes
fn bench_ngrams(c: &mut Criterion) {
    let words = tokenize(&corpus(50));
    let mut group = c.benchmark_group("ngrams");
    group.throughput(Throughput::Elements(words.len() as u64));

    for n in [1, 2, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| ngrams(black_box(&words), n));
        });
    }

    group.finish();
}

/// Benchmark: Skip-grams, sorted vs. preserved
fn bench_skipgrams(c: &mut Criterion) {
    let words = tokenize(&corpus(20));
    let mut group = c.benchmark_group("skipgrams");
    group.measurement_time(Duration::from_secs(5));

    for order in [OrderPolicy::Sort, OrderPolicy::Preserve] {
        group.bench_with_input(
            BenchmarkId::new("size2_distance5", order),
            &order,
            |b, &order| {
                b.iter(|| skipgrams(black_box(&words), 2, 5, order));
            },
        );
    }

    group.finish();
}

/// Benchmark: Bag reduction under both case modes
fn bench_bags(c: &mut Criterion) {
    let words = tokenize(&corpus(20));
    let mut group = c.benchmark_group("bags");

    for case in [CaseMode::Sensitive, CaseMode::Insensitive] {
        group.bench_with_input(BenchmarkId::new("bag_of_bigrams", case), &case, |b, &case| {
            b.iter(|| bag_of_ngrams(black_box(&words), 2, case));
        });
        group.bench_with_input(
            BenchmarkId::new("bag_of_skipgrams", case),
            &case,
            |b, &case| {
                b.iter(|| bag_of_skipgrams(black_box(&words), 1, 5, OrderPolicy::Sort, case));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_ngrams, bench_skipgrams, bench_bags);
criterion_main!(benches);
