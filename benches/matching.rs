//! Performance benchmarks for the mention matchers.
//!
//! # Usage
//!
//! ```bash
//! cargo bench --bench matching
//! ```

use el_mention::{
    normalize, process_records, Matcher, MatcherKind, Record, SlidingWindowMatcher, TrigramMatcher,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LABEL: &str = "Abraham Lincoln";
const QUESTION: &str =
    "Who was the vice president under the president who approved the Emancipation Proclamation of Abraham Lincoln";
const RAW_DBR: &str = "http://dbpedia.org/resource/François_Hollande_(politician)";

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(RAW_DBR))));
}

fn bench_matchers(c: &mut Criterion) {
    c.bench_function("TrigramMatcher", |b| {
        b.iter(|| TrigramMatcher.find(black_box(LABEL), black_box(QUESTION)))
    });
    c.bench_function("SlidingWindowMatcher", |b| {
        b.iter(|| SlidingWindowMatcher.find(black_box(LABEL), black_box(QUESTION)))
    });
}

fn bench_dataset(c: &mut Criterion) {
    let records: Vec<Record> = (0..500)
        .map(|i| {
            Record::new(
                i,
                i,
                format!("{} number {}?", QUESTION, i),
                "http://dbpedia.org/resource/Abraham_Lincoln",
            )
        })
        .collect();

    c.bench_function("process_records/sequential", |b| {
        b.iter(|| process_records(black_box(&records), MatcherKind::Trigram, false))
    });
    c.bench_function("process_records/parallel", |b| {
        b.iter(|| process_records(black_box(&records), MatcherKind::Trigram, true))
    });
}

criterion_group!(benches, bench_normalize, bench_matchers, bench_dataset);
criterion_main!(benches);
