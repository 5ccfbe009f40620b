//! Benchmark tests for hlsbridge-core operations
//!
//! Run with: cargo bench -p hlsbridge-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hlsbridge_core::metadata::MetadataCueSync;
use hlsbridge_core::ranges::{find_range, TimeRange};
use hlsbridge_core::representations::selection_mode;
use hlsbridge_core::tracks::TextTrackList;
use hlsbridge_core::types::{LevelSelection, MetadataFrame, Representation};
use hlsbridge_core::{BridgeConfig, MetadataTag, PlayerView};

// ============================================================================
// Helpers
// ============================================================================

struct SteadyView {
    time: f64,
}

impl PlayerView for SteadyView {
    fn current_time(&self) -> f64 {
        self.time
    }
    fn duration(&self) -> f64 {
        3600.0
    }
    fn buffered(&self) -> Vec<TimeRange> {
        vec![TimeRange::new(0.0, self.time + 30.0)]
    }
}

fn ladder(size: usize) -> Vec<Representation> {
    (0..size)
        .map(|i| Representation {
            id: i.to_string(),
            width: 640 + 64 * i as u32,
            height: 360 + 36 * i as u32,
            bandwidth: 500_000 * (i as u64 + 1),
            enabled: true,
        })
        .collect()
}

fn text_tag(text: &str) -> MetadataTag {
    MetadataTag {
        frames: vec![MetadataFrame {
            key: "TXXX".to_string(),
            value: Some(text.to_string()),
            ..Default::default()
        }],
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_selection_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_reduction");
    for size in [4usize, 16, 64] {
        let mut reps = ladder(size);
        // A strict subset exercises the capped-auto branch
        reps[0].enabled = false;
        group.bench_with_input(BenchmarkId::from_parameter(size), &reps, |b, reps| {
            b.iter(|| {
                let selection: LevelSelection = selection_mode(black_box(reps)).into();
                black_box(selection)
            })
        });
    }
    group.finish();
}

fn bench_metadata_ingest(c: &mut Criterion) {
    c.bench_function("metadata_ingest_200_tags", |b| {
        b.iter(|| {
            let mut sync = MetadataCueSync::new(&BridgeConfig::default());
            let mut tracks = TextTrackList::new();
            for i in 0..200 {
                let view = SteadyView { time: i as f64 };
                sync.ingest(&mut tracks, &view, text_tag("segment marker"));
            }
            black_box(tracks.len())
        })
    });
}

fn bench_find_range(c: &mut Criterion) {
    let ranges: Vec<TimeRange> = (0..64)
        .map(|i| TimeRange::new(i as f64 * 10.0, i as f64 * 10.0 + 8.0))
        .collect();

    c.bench_function("find_range_64", |b| {
        b.iter(|| black_box(find_range(black_box(&ranges), 321.0)))
    });
}

criterion_group!(
    benches,
    bench_selection_reduction,
    bench_metadata_ingest,
    bench_find_range
);
criterion_main!(benches);
