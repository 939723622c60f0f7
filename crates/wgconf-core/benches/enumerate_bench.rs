//! Criterion benchmarks for [`FileConfigStore::enumerate`].
//!
//! Enumeration hits the filesystem on every call, so its cost grows with the
//! number of directory entries, managed or not.  These benchmarks measure a
//! root holding only managed files and a root where most entries are noise.
//!
//! Run with:
//! ```bash
//! cargo bench --package wgconf-core --bench enumerate_bench
//! ```

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;
use wgconf_core::{ConfigStore, FileConfigStore};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Creates a storage root with `managed` `.conf` files and `unmanaged` other files.
fn build_root(managed: usize, unmanaged: usize) -> PathBuf {
    let root = std::env::temp_dir().join(format!("wgconf_bench_{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create bench root");

    let store = FileConfigStore::new(&root);
    for i in 0..managed {
        store
            .create(&format!("wg{i}"), "[Interface]\n".to_string())
            .expect("fresh names never conflict");
    }
    for i in 0..unmanaged {
        fs::write(root.join(format!("other-{i}.txt")), "x").expect("write unmanaged file");
    }
    root
}

fn bench_enumerate_managed_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_managed_only");

    for &n in &[1usize, 16, 256] {
        let root = build_root(n, 0);
        let store = FileConfigStore::new(&root);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(store.enumerate().expect("enumerate")))
        });

        fs::remove_dir_all(&root).ok();
    }

    group.finish();
}

fn bench_enumerate_mostly_unmanaged(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_mostly_unmanaged");

    for &n in &[16usize, 256] {
        let root = build_root(n / 8, n);
        let store = FileConfigStore::new(&root);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(store.enumerate().expect("enumerate")))
        });

        fs::remove_dir_all(&root).ok();
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_enumerate_managed_only,
    bench_enumerate_mostly_unmanaged
);
criterion_main!(benches);
