//! Intrusive Pairing Heap for Rust
//!
//! This crate provides a pairing heap that orders nodes it does not own. The
//! caller keeps the records wherever it likes; the heap is only a view over
//! two links per node (`children` and `sibling`) plus a root.
//!
//! # Features
//!
//! - **Meld**: O(1) union of two heaps
//! - **Insert**: O(1) worst case
//! - **Delete-min**: O(log n) amortized, via two-pass pairwise merging
//! - **Visit**: O(n) traversal of every node, in tree order
//! - **No allocation**: nodes are never allocated, moved, or freed by the heap
//! - **Caller-defined ordering**: any strict weak order, so min-heaps and
//!   max-heaps share one implementation
//!
//! # Node Stores
//!
//! The engine in [`pairing`] is generic over a [`NodeStore`]:
//!
//! - [`storage`]: `Vec`/slice arenas keyed by index, and `SlotMap` arenas
//!   with the `arena-storage` feature
//! - [`intrusive`]: records that embed a [`PairingLink`](intrusive::PairingLink)
//!   and are linked by reference
//!
//! # Example
//!
//! ```rust
//! use intrusive_pairing_heap::storage::Node;
//! use intrusive_pairing_heap::{ascending, pairing, Heap};
//!
//! let mut nodes: Vec<Node<i32>> = [5, 3, 8, 1].into_iter().map(Node::new).collect();
//! let mut heap = Heap::Empty;
//! for key in Node::keys(&nodes) {
//!     heap = pairing::insert(&mut nodes, heap, key, ascending);
//! }
//!
//! let min = heap.root().unwrap();
//! assert_eq!(nodes[min.0].value, 1);
//!
//! heap = pairing::delete_min(&mut nodes, min, ascending);
//! assert_eq!(pairing::len(&nodes, heap), 3);
//! ```

pub mod heap;
pub mod intrusive;
pub mod pairing;
pub mod storage;
pub mod traits;

pub use heap::Heap;
pub use traits::{ascending, descending, HeapError, NodeStore};
