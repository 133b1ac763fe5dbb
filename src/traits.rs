//! Common traits for the pairing heap engine
//!
//! This module provides the seam between the heap algorithms and the memory
//! that holds the nodes:
//!
//! - [`NodeStore`]: caller-owned storage that exposes the two links of every
//!   node and resolves a node key back to the record it belongs to
//! - [`HeapError`]: structural problems reported by [`validate`]
//!
//! The engine in [`crate::pairing`] never allocates or frees a node. It only
//! reads and rewrites links through a `NodeStore`, so the same algorithm runs
//! over a `Vec` arena, a `SlotMap`, or records that embed their own links.
//!
//! [`validate`]: crate::pairing::validate

use std::fmt;

/// Error type for heap validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The root of a heap is still linked into a sibling list
    RootHasSibling,
    /// A child is strictly preferred over its parent under the comparator
    OrderViolated,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::RootHasSibling => {
                write!(f, "heap root is linked into a sibling list")
            }
            HeapError::OrderViolated => {
                write!(f, "child node is ordered before its parent")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Storage for heap nodes, owned by the caller
///
/// Every node carries two non-owning links, encoding a multi-way tree as
/// leftmost-child / right-sibling lists:
///
/// - `children`: head of the node's immediate child list
/// - `sibling`: next node in whatever sibling list the node belongs to
///
/// Keys are cheap handles (`Copy`) that identify a node inside the store.
/// Looking up a key that does not belong to the store is a caller error;
/// implementations are allowed to panic on it.
///
/// # Example
///
/// ```rust
/// use intrusive_pairing_heap::storage::{Node, NodeIndex};
/// use intrusive_pairing_heap::NodeStore;
///
/// let mut nodes = vec![Node::new(3), Node::new(7)];
/// nodes.set_children(NodeIndex(0), Some(NodeIndex(1)));
///
/// assert_eq!(*nodes.item(NodeIndex(1)), 7);
/// assert_eq!(nodes.children(NodeIndex(0)), Some(NodeIndex(1)));
/// assert_eq!(nodes.sibling(NodeIndex(0)), None);
/// ```
pub trait NodeStore {
    /// Handle identifying one node in the store
    type Key: Copy + Eq + fmt::Debug;

    /// Record the comparator sees for a node
    type Item: ?Sized;

    /// Resolves a node to the record that owns it
    fn item(&self, key: Self::Key) -> &Self::Item;

    /// Head of the node's immediate child list
    fn children(&self, key: Self::Key) -> Option<Self::Key>;

    /// Next node in the sibling list this node belongs to
    fn sibling(&self, key: Self::Key) -> Option<Self::Key>;

    /// Replaces the head of the node's child list
    fn set_children(&mut self, key: Self::Key, children: Option<Self::Key>);

    /// Replaces the node's sibling link
    fn set_sibling(&mut self, key: Self::Key, sibling: Option<Self::Key>);
}

/// Min-heap ordering for any `PartialOrd` record.
///
/// ```rust
/// use intrusive_pairing_heap::ascending;
///
/// assert!(ascending(&1, &2));
/// assert!(!ascending(&2, &2));
/// ```
#[inline]
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Max-heap ordering for any `PartialOrd` record.
#[inline]
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}
