//! # Bloom Visualizer Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | insert / check | k hashes over the word |
//! | remove | full rebuild from the member set |
//! | update_params | full rebuild at the new size |
//! | session add | insert plus snapshot and history entry |

use std::time::Duration;

use bv_01_filter_engine::domain::compute_hash_positions;
use bv_01_filter_engine::BloomFilter;
use bv_03_session::{SessionConfig, VisualizerApi, VisualizerSession};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::Rng;

fn random_words(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

// ============================================================================
// Hashing
// ============================================================================

fn bench_hash_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("bv-01-hashing");

    for hash_count in [1usize, 3, 5] {
        group.bench_with_input(
            BenchmarkId::new("compute_hash_positions", hash_count),
            &hash_count,
            |b, &k| b.iter(|| black_box(compute_hash_positions("polygenelubricants", k, 128))),
        );
    }

    group.finish();
}

// ============================================================================
// Engine operations
// ============================================================================

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("bv-01-filter-engine");
    group.measurement_time(Duration::from_secs(5));

    let words = random_words(200);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("insert_200", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(128, 3);
            for word in &words {
                filter.insert(word);
            }
            black_box(filter.bits_set())
        })
    });

    let mut full = BloomFilter::new(128, 3);
    for word in &words {
        full.insert(word);
    }

    group.bench_function("might_contain_200", |b| {
        b.iter(|| words.iter().filter(|w| full.might_contain(w)).count())
    });

    for members in [10usize, 50, 200] {
        let mut base = BloomFilter::new(128, 3);
        for word in words.iter().take(members) {
            base.insert(word);
        }
        let victim = words[0].clone();

        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(
            BenchmarkId::new("remove_rebuild", members),
            &members,
            |b, _| {
                b.iter_batched(
                    || base.clone(),
                    |mut filter| black_box(filter.remove(&victim)),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("update_params", members),
            &members,
            |b, _| {
                b.iter_batched(
                    || base.clone(),
                    |mut filter| black_box(filter.update_params(64, 5)),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

// ============================================================================
// Session operations
// ============================================================================

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("bv-03-session");
    let words = random_words(60);

    group.bench_function("add_60_with_history", |b| {
        b.iter(|| {
            let mut session = VisualizerSession::new(&SessionConfig::default());
            for word in &words {
                let _ = session.add_word(word);
            }
            black_box(session.history().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_hash_positions, bench_engine, bench_session);
criterion_main!(benches);
