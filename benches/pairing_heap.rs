//! Criterion benchmarks for the pairing heap engine
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench pairing_heap
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use intrusive_pairing_heap::intrusive::{Intrusive, Linked, NodeRef, PairingLink};
use intrusive_pairing_heap::storage::Node;
use intrusive_pairing_heap::{ascending, pairing, Heap};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

/// Deterministic scrambled priorities
fn priorities(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 16)
        .collect()
}

struct Item<'a> {
    priority: u64,
    link: PairingLink<'a, Item<'a>>,
}

impl<'a> Linked<'a> for Item<'a> {
    fn pairing_link(&self) -> &PairingLink<'a, Self> {
        &self.link
    }
}

fn by_priority(a: &Item<'_>, b: &Item<'_>) -> bool {
    a.priority < b.priority
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &SIZES {
        let values = priorities(n);
        group.bench_with_input(BenchmarkId::new("arena", n), &values, |b, values| {
            b.iter(|| {
                let mut nodes: Vec<Node<u64>> = values.iter().copied().map(Node::new).collect();
                let mut heap = Heap::Empty;
                for key in Node::keys(&nodes) {
                    heap = pairing::insert(&mut nodes, heap, key, ascending);
                }
                black_box(heap)
            })
        });
    }
    group.finish();
}

fn benchmark_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");
    for &n in &SIZES {
        let values = priorities(n);
        group.bench_with_input(BenchmarkId::new("arena", n), &values, |b, values| {
            b.iter(|| {
                let mut nodes: Vec<Node<u64>> = values.iter().copied().map(Node::new).collect();
                let mut heap = Heap::Empty;
                for key in Node::keys(&nodes) {
                    heap = pairing::insert(&mut nodes, heap, key, ascending);
                }
                let mut last = 0;
                while let Some(key) = pairing::pop(&mut nodes, &mut heap, ascending) {
                    last = nodes[key.0].value;
                }
                black_box(last)
            })
        });
        group.bench_with_input(BenchmarkId::new("intrusive", n), &values, |b, values| {
            b.iter(|| {
                let items: Vec<Item<'_>> = values
                    .iter()
                    .map(|&priority| Item {
                        priority,
                        link: PairingLink::new(),
                    })
                    .collect();
                let mut store = Intrusive::new();
                let mut heap = Heap::Empty;
                for item in &items {
                    heap = pairing::insert(&mut store, heap, NodeRef::new(item), by_priority);
                }
                let mut last = 0;
                while let Some(item) = pairing::pop(&mut store, &mut heap, by_priority) {
                    last = item.priority;
                }
                black_box(last)
            })
        });
    }
    group.finish();
}

fn benchmark_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");
    for &n in &SIZES {
        let values = priorities(n);
        let mut nodes: Vec<Node<u64>> = values.iter().copied().map(Node::new).collect();
        let mut heap = Heap::Empty;
        for key in Node::keys(&nodes) {
            heap = pairing::insert(&mut nodes, heap, key, ascending);
        }
        // One pop so the tree is no longer a single fan-out level
        if let Some(root) = heap.root() {
            heap = pairing::delete_min(&mut nodes, root, ascending);
        }

        group.bench_with_input(BenchmarkId::from_parameter(n), &heap, |b, &heap| {
            b.iter(|| {
                let mut sum = 0u64;
                pairing::visit(&nodes, heap, |key| sum = sum.wrapping_add(nodes[key.0].value));
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_heapsort, benchmark_visit);
criterion_main!(benches);
