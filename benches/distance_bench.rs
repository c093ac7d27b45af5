use criterion::{Criterion, criterion_group, criterion_main};
use glossa::spelling::{DamerauLevenshtein, EditDistance};
use std::hint::black_box;

fn generate_word_pairs() -> Vec<(String, String)> {
    let words = [
        "academically",
        "groundbreaking",
        "electrodynamics",
        "relativity",
        "argument",
        "miracle",
        "published",
        "الاختصارات",
    ];

    let mut pairs = Vec::new();
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        let mut swapped = chars.clone();
        swapped.swap(1, 2);
        let mut dropped = chars.clone();
        dropped.remove(chars.len() / 2);

        pairs.push((word.to_string(), swapped.into_iter().collect()));
        pairs.push((word.to_string(), dropped.into_iter().collect()));
    }
    pairs
}

fn bench_edit_distance(c: &mut Criterion) {
    let pairs = generate_word_pairs();
    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("damerau_levenshtein_reused", |b| {
        let mut metric = DamerauLevenshtein::new();
        b.iter(|| {
            for (source, target) in &pairs {
                black_box(metric.distance(black_box(source), black_box(target)));
            }
        })
    });

    group.bench_function("damerau_levenshtein_fresh", |b| {
        b.iter(|| {
            for (source, target) in &pairs {
                let mut metric = DamerauLevenshtein::new();
                black_box(metric.distance(black_box(source), black_box(target)));
            }
        })
    });

    let long_a = "abcdefghij".repeat(20);
    let long_b = "abdcefhgij".repeat(20);
    group.bench_function("damerau_levenshtein_long", |b| {
        let mut metric = DamerauLevenshtein::new();
        b.iter(|| black_box(metric.distance(black_box(&long_a), black_box(&long_b))))
    });

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
