// ABOUTME: Criterion benchmarks for coach response plan extraction
// ABOUTME: Measures classification, meal and workout extraction, and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for plan extraction.
//!
//! Measures the line scanners and the classifier on generated responses of
//! increasing length, plus parallel batch extraction.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use coach_plans::intelligence::{group_workouts_by_day, PlanExtractor};
use common::fixtures::{
    meal_response, mixed_response, response_batch, workout_response, ResponseSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [ResponseSize; 3] = [ResponseSize::Week, ResponseSize::Month, ResponseSize::Quarter];

/// Benchmark whole-text classification
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_plan_type");
    let extractor = PlanExtractor::default();

    for size in SIZES {
        let text = mixed_response(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size.days()), &text, |b, text| {
            b.iter(|| extractor.classify_plan_type(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the meal line scanner
fn bench_meal_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_meal_plan");
    let extractor = PlanExtractor::default();

    for size in SIZES {
        let text = meal_response(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("days", size.days()), &text, |b, text| {
            b.iter(|| extractor.extract_meal_plan(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the workout line scanner and day grouping
fn bench_workout_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_workout_plan");
    let extractor = PlanExtractor::default();

    for size in SIZES {
        let text = workout_response(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("days", size.days()), &text, |b, text| {
            b.iter(|| extractor.extract_workout_plan(black_box(text)));
        });
    }

    let entries = extractor.extract_workout_plan(&workout_response(ResponseSize::Quarter));
    group.bench_function("group_by_day", |b| {
        b.iter(|| group_workouts_by_day(black_box(&entries)));
    });

    group.finish();
}

/// Benchmark sequential against parallel processing of many responses
fn bench_batch_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_batch");
    let extractor = PlanExtractor::default();

    for count in [10_usize, 100] {
        let batch = response_batch(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|text| extractor.extract(black_box(text)))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &batch, |b, batch| {
            b.iter(|| extractor.extract_batch(black_box(batch)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_meal_extraction,
    bench_workout_extraction,
    bench_batch_extraction,
);

criterion_main!(benches);
