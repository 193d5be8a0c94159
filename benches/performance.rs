//! Performance benchmarks for the todo store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;
use todo_store::{MemoryStorage, Store, StoreConfig, TodoId};

fn create_file_store(dir: &TempDir) -> Store {
    Store::open(StoreConfig {
        path: dir.path().join("todos.json"),
    })
    .unwrap()
}

/// Benchmark adding a todo at varying list sizes.
///
/// Each mutation rewrites the whole slot, so cost grows with list size.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for list_size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("list_size", list_size),
            &list_size,
            |b, &size| {
                let store = Store::with_storage(Box::new(MemoryStorage::new())).unwrap();
                for i in 0..size {
                    store.add(format!("task {}", i)).unwrap();
                }

                b.iter(|| {
                    black_box(store.add("one more").unwrap());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark toggling against the file backend (fsync per mutation).
fn bench_toggle_file_backed(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = create_file_store(&dir);

    for i in 0..100 {
        store.add(format!("task {}", i)).unwrap();
    }

    c.bench_function("toggle_file_backed", |b| {
        b.iter(|| {
            store.toggle(black_box(TodoId(50))).unwrap();
        });
    });
}

/// Benchmark snapshot reads.
fn bench_todos_snapshot(c: &mut Criterion) {
    let store = Store::with_storage(Box::new(MemoryStorage::new())).unwrap();
    for i in 0..1000 {
        store.add(format!("task {}", i)).unwrap();
    }

    c.bench_function("todos_snapshot_1000", |b| {
        b.iter(|| {
            black_box(store.todos());
        });
    });
}

criterion_group!(benches, bench_add, bench_toggle_file_backed, bench_todos_snapshot);
criterion_main!(benches);
