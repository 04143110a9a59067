// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation logic.
//!
//! Measures the performance of:
//! - Year grouping over catalogs of growing size
//! - Draining a burst of queued navigation requests
//! - Active-section lookup while scrolling

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::domain::{Artwork, ArtworkId, Catalog, Year};
use iced_folio::gallery::grouping;
use iced_folio::gallery::section_tracker::{SectionMetrics, SectionTracker};
use iced_folio::gallery::{Sequencer, Timing, Trigger};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Catalog of `size` artworks spread over twenty years.
fn synthetic_catalog(size: usize) -> Catalog {
    let artworks = (0..size)
        .map(|i| {
            let year = Year::new(2000 + (i % 20) as i32).unwrap();
            Artwork::builder(i.to_string(), format!("Work {i}"), year, format!("{i}.jpg")).build()
        })
        .collect();
    Catalog::new(artworks)
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_grouping");

    for size in [6, 100, 1_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(grouping::group_by_year(catalog.artworks())));
        });
    }

    group.finish();
}

/// Queues a burst of manual requests, then ticks until the queue settles.
fn bench_queue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_sequencer");
    let catalog = synthetic_catalog(100);
    let targets: Vec<ArtworkId> = catalog.ids().skip(1).take(20).cloned().collect();

    group.bench_function("drain_20_requests", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut sequencer = Sequencer::new(&catalog, Timing::default(), false, start);
            for target in &targets {
                sequencer.request_navigate(target.clone(), Trigger::Manual, start);
            }
            let mut now = start;
            while sequencer.is_in_flight() {
                now += Duration::from_millis(50);
                black_box(sequencer.tick(now));
            }
            black_box(sequencer.current().cloned());
        });
    });

    group.finish();
}

fn bench_section_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_sections");
    let catalog = synthetic_catalog(1_000);
    let offsets = SectionMetrics::default().offsets(&grouping::group_by_year(catalog.artworks()));
    let tracker = SectionTracker::new(offsets);

    group.bench_function("section_at", |b| {
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset = (offset + 137.0) % 30_000.0;
            black_box(tracker.section_at(offset, 800.0));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_grouping,
    bench_queue_drain,
    bench_section_lookup
);
criterion_main!(benches);
