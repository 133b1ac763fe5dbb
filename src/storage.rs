//! Arena node stores
//!
//! This module provides [`NodeStore`] implementations where the caller keeps
//! nodes in a contiguous arena and refers to them by key:
//!
//! - `[Node<T>]` and `Vec<Node<T>>`, keyed by [`NodeIndex`]
//! - `SlotMap<K, Node<T, K>>`, keyed by any slotmap key (requires the
//!   `arena-storage` feature)
//!
//! The heap never inserts into or removes from the arena. A node stays in the
//! arena for as long as the caller wants it, whether or not it is currently
//! part of a heap.
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
//! let order: Vec<i32> = pairing::drain_sorted(&mut nodes, &mut heap, ascending)
//!     .collect::<Vec<_>>()
//!     .into_iter()
//!     .map(|key| nodes[key.0].value)
//!     .collect();
//! assert_eq!(order, vec![1, 3, 5, 8]);
//! ```

use crate::traits::NodeStore;
use std::fmt;
use std::ops::{Deref, DerefMut};

#[cfg(feature = "arena-storage")]
use slotmap::{new_key_type, SlotMap};

/// The two links every heap node carries
///
/// Both links are non-owning: they name other nodes in the same store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link<K> {
    children: Option<K>,
    sibling: Option<K>,
}

impl<K: Copy> Link<K> {
    /// Creates a link with no children and no sibling
    #[inline]
    pub const fn new() -> Self {
        Link {
            children: None,
            sibling: None,
        }
    }

    /// Head of the child list
    #[inline]
    pub fn children(&self) -> Option<K> {
        self.children
    }

    /// Next node in the sibling list
    #[inline]
    pub fn sibling(&self) -> Option<K> {
        self.sibling
    }

    /// Returns true if the node has neither children nor a sibling
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.children.is_none() && self.sibling.is_none()
    }
}

impl<K: Copy> Default for Link<K> {
    #[inline]
    fn default() -> Self {
        Link::new()
    }
}

/// Position of a node in a slice or `Vec` arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// The arena position
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record paired with its heap links
///
/// `K` is the key type of the arena the node lives in. It defaults to
/// [`NodeIndex`] for slice and `Vec` arenas.
#[derive(Clone, Debug)]
pub struct Node<T, K = NodeIndex> {
    /// The record the comparator orders
    pub value: T,
    link: Link<K>,
}

impl<T> Node<T> {
    /// Creates an unlinked node for a slice or `Vec` arena
    #[inline]
    pub const fn new(value: T) -> Self {
        Node::unlinked(value)
    }

    /// Keys of every node in a slice arena, in arena order
    pub fn keys(nodes: &[Node<T>]) -> impl Iterator<Item = NodeIndex> {
        (0..nodes.len()).map(NodeIndex)
    }
}

impl<T, K> Node<T, K> {
    /// Creates an unlinked node for an arena keyed by `K`
    #[inline]
    pub const fn unlinked(value: T) -> Self {
        Node {
            value,
            link: Link {
                children: None,
                sibling: None,
            },
        }
    }

    /// Current links of the node
    #[inline]
    pub fn link(&self) -> &Link<K> {
        &self.link
    }

    /// Consumes the node, returning its record
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, K> Deref for Node<T, K> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, K> DerefMut for Node<T, K> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

// ============================================================================
// Slice and Vec arenas
// ============================================================================

impl<T> NodeStore for [Node<T>] {
    type Key = NodeIndex;
    type Item = T;

    #[inline]
    fn item(&self, key: NodeIndex) -> &T {
        &self[key.0].value
    }

    #[inline]
    fn children(&self, key: NodeIndex) -> Option<NodeIndex> {
        self[key.0].link.children
    }

    #[inline]
    fn sibling(&self, key: NodeIndex) -> Option<NodeIndex> {
        self[key.0].link.sibling
    }

    #[inline]
    fn set_children(&mut self, key: NodeIndex, children: Option<NodeIndex>) {
        self[key.0].link.children = children;
    }

    #[inline]
    fn set_sibling(&mut self, key: NodeIndex, sibling: Option<NodeIndex>) {
        self[key.0].link.sibling = sibling;
    }
}

impl<T> NodeStore for Vec<Node<T>> {
    type Key = NodeIndex;
    type Item = T;

    #[inline]
    fn item(&self, key: NodeIndex) -> &T {
        self.as_slice().item(key)
    }

    #[inline]
    fn children(&self, key: NodeIndex) -> Option<NodeIndex> {
        self.as_slice().children(key)
    }

    #[inline]
    fn sibling(&self, key: NodeIndex) -> Option<NodeIndex> {
        self.as_slice().sibling(key)
    }

    #[inline]
    fn set_children(&mut self, key: NodeIndex, children: Option<NodeIndex>) {
        self.as_mut_slice().set_children(key, children);
    }

    #[inline]
    fn set_sibling(&mut self, key: NodeIndex, sibling: Option<NodeIndex>) {
        self.as_mut_slice().set_sibling(key, sibling);
    }
}

// ============================================================================
// SlotMap arena
// ============================================================================

#[cfg(feature = "arena-storage")]
new_key_type! {
    /// Ready-made slotmap key for heap arenas
    pub struct ArenaKey;
}

/// Generational arena of heap nodes
///
/// Stale keys (nodes removed from the slotmap while still linked) panic on
/// lookup instead of reading a reused slot.
#[cfg(feature = "arena-storage")]
pub type SlotMapStore<T, K = ArenaKey> = SlotMap<K, Node<T, K>>;

#[cfg(feature = "arena-storage")]
impl<K: slotmap::Key, T> NodeStore for SlotMap<K, Node<T, K>> {
    type Key = K;
    type Item = T;

    #[inline]
    fn item(&self, key: K) -> &T {
        &self[key].value
    }

    #[inline]
    fn children(&self, key: K) -> Option<K> {
        self[key].link.children
    }

    #[inline]
    fn sibling(&self, key: K) -> Option<K> {
        self[key].link.sibling
    }

    #[inline]
    fn set_children(&mut self, key: K, children: Option<K>) {
        self[key].link.children = children;
    }

    #[inline]
    fn set_sibling(&mut self, key: K, sibling: Option<K>) {
        self[key].link.sibling = sibling;
    }
}
