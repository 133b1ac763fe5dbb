//! Pairing heap engine
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) meld and insert
//! - O(log n) amortized delete_min
//!
//! The tree is encoded as leftmost-child / right-sibling lists and lives
//! entirely in a caller-owned [`NodeStore`]. Every operation here only
//! rewrites links; no node is ever allocated, moved, or freed.
//!
//! Ordering comes from a comparator `cmp(a, b)` that returns true when `a`
//! must come out before `b`. It must be a strict weak order. A comparator
//! that is not gives an unspecified tree shape, never unsoundness. Ties are
//! broken arbitrarily.
//!
//! # Example
//!
//! ```rust
//! use intrusive_pairing_heap::storage::Node;
//! use intrusive_pairing_heap::{descending, pairing, Heap};
//!
//! let mut nodes: Vec<Node<u32>> = [4, 9, 2].into_iter().map(Node::new).collect();
//! let mut heap = Heap::Empty;
//! for key in Node::keys(&nodes) {
//!     heap = pairing::insert(&mut nodes, heap, key, descending);
//! }
//!
//! let max = pairing::pop(&mut nodes, &mut heap, descending).unwrap();
//! assert_eq!(nodes[max.0].value, 9);
//! assert_eq!(pairing::len(&nodes, heap), 2);
//! ```

use crate::heap::Heap;
use crate::traits::{HeapError, NodeStore};
use smallvec::SmallVec;
use tracing::trace;

/// Links two roots, making the comparator-preferred one the parent.
///
/// The other root is prepended to the winner's child list. Both inputs must
/// be roots (no sibling).
#[inline]
fn link_roots<S, F>(store: &mut S, left: S::Key, right: S::Key, cmp: &mut F) -> S::Key
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (root, child) = if cmp(store.item(left), store.item(right)) {
        (left, right)
    } else {
        (right, left)
    };
    let first_child = store.children(root);
    store.set_sibling(child, first_child);
    store.set_children(root, Some(child));
    root
}

fn meld_with<S, F>(
    store: &mut S,
    left: Heap<S::Key>,
    right: Heap<S::Key>,
    cmp: &mut F,
) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    match (left, right) {
        (Heap::Empty, other) | (other, Heap::Empty) => other,
        (Heap::Root(left), Heap::Root(right)) => Heap::Root(link_roots(store, left, right, cmp)),
    }
}

/// Combines two heaps into one.
///
/// An empty heap is the identity on either side. Otherwise `cmp(left, right)`
/// decides the new root: `left` wins when it returns true, `right` otherwise.
///
/// Both heaps must live in `store` and must not share nodes.
///
/// # Time Complexity
/// O(1)
pub fn meld<S, F>(
    store: &mut S,
    left: Heap<S::Key>,
    right: Heap<S::Key>,
    mut cmp: F,
) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    meld_with(store, left, right, &mut cmp)
}

/// Adds `elem` to `heap` and returns the combined heap.
///
/// `elem`'s links are reset first, so it enters as a singleton heap. It must
/// not currently belong to any heap.
///
/// # Time Complexity
/// O(1)
pub fn insert<S, F>(store: &mut S, heap: Heap<S::Key>, elem: S::Key, mut cmp: F) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    store.set_children(elem, None);
    store.set_sibling(elem, None);
    meld_with(store, Heap::Root(elem), heap, &mut cmp)
}

fn merge_pairs_with<S, F>(store: &mut S, list: Option<S::Key>, cmp: &mut F) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let first = match list {
        None => return Heap::Empty,
        Some(first) => first,
    };
    if store.sibling(first).is_none() {
        return Heap::Root(first);
    }

    // First pass, left to right: meld adjacent pairs. Each pair root is
    // pushed onto `pairs` through its sibling link, which leaves `pairs`
    // holding the rightmost pair first.
    let mut pairs = None;
    let mut subtrees = 0usize;
    let mut cursor = Some(first);
    while let Some(node) = cursor {
        let root = match store.sibling(node) {
            Some(next) => {
                cursor = store.sibling(next);
                store.set_sibling(node, None);
                store.set_sibling(next, None);
                subtrees += 2;
                link_roots(store, node, next, cmp)
            }
            None => {
                cursor = None;
                subtrees += 1;
                node
            }
        };
        store.set_sibling(root, pairs);
        pairs = Some(root);
    }

    // Second pass, right to left: fold every pair into the accumulated heap,
    // pair on the left.
    let mut merged = None;
    while let Some(pair) = pairs {
        pairs = store.sibling(pair);
        store.set_sibling(pair, None);
        merged = Some(match merged {
            None => pair,
            Some(rest) => link_roots(store, pair, rest, cmp),
        });
    }

    trace!(subtrees, "merged sibling list");
    Heap::from(merged)
}

/// Rebuilds a single heap from a detached sibling list.
///
/// `list` is the head of a sibling list whose nodes are each the root of a
/// heap-ordered subtree, typically the child list of a removed root. Uses
/// the classic two-pass policy: meld pairs left to right, then fold the
/// pairs right to left.
///
/// The passes run iteratively, so arbitrarily long sibling lists use
/// constant stack.
///
/// # Time Complexity
/// O(log n) amortized over a sequence of deletions
pub fn merge_pairs<S, F>(store: &mut S, list: Option<S::Key>, mut cmp: F) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    merge_pairs_with(store, list, &mut cmp)
}

/// Removes `root` from its heap and returns the remaining heap.
///
/// `root` must be the root of a heap in `store`; holding the key of a
/// [`Heap::Root`] is how a caller proves the heap is non-empty. The removed
/// node comes back detached from its children. Its sibling link is never
/// read or written.
///
/// # Time Complexity
/// O(log n) amortized
pub fn delete_min<S, F>(store: &mut S, root: S::Key, mut cmp: F) -> Heap<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let children = store.children(root);
    store.set_children(root, None);
    merge_pairs_with(store, children, &mut cmp)
}

/// Removes and returns the root of `heap`, or `None` if it is empty.
///
/// # Time Complexity
/// O(log n) amortized
pub fn pop<S, F>(store: &mut S, heap: &mut Heap<S::Key>, cmp: F) -> Option<S::Key>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let root = heap.root()?;
    *heap = delete_min(store, root, cmp);
    Some(root)
}

/// Iterator over every node of a heap, in traversal order.
///
/// Created by [`nodes`].
pub struct Nodes<'s, S: NodeStore + ?Sized> {
    store: &'s S,
    stack: SmallVec<[S::Key; 16]>,
}

impl<S: NodeStore + ?Sized> Iterator for Nodes<'_, S> {
    type Item = S::Key;

    fn next(&mut self) -> Option<S::Key> {
        let node = self.stack.pop()?;
        // Children are pushed last so they are visited before siblings.
        if let Some(sibling) = self.store.sibling(node) {
            self.stack.push(sibling);
        }
        if let Some(child) = self.store.children(node) {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Iterates over every node reachable from `heap`.
///
/// The order is pre-order with children before siblings. It is deterministic
/// for a given tree shape but unrelated to priority.
pub fn nodes<S>(store: &S, heap: Heap<S::Key>) -> Nodes<'_, S>
where
    S: NodeStore + ?Sized,
{
    let mut stack = SmallVec::new();
    if let Heap::Root(root) = heap {
        stack.push(root);
    }
    Nodes { store, stack }
}

/// Calls `visitor` once for every node reachable from `heap`.
///
/// Visiting an empty heap does nothing.
///
/// # Time Complexity
/// O(n)
pub fn visit<S, V>(store: &S, heap: Heap<S::Key>, visitor: V)
where
    S: NodeStore + ?Sized,
    V: FnMut(S::Key),
{
    nodes(store, heap).for_each(visitor);
}

/// Counts the nodes in `heap` by traversal.
///
/// # Time Complexity
/// O(n)
pub fn len<S>(store: &S, heap: Heap<S::Key>) -> usize
where
    S: NodeStore + ?Sized,
{
    nodes(store, heap).count()
}

/// Iterator that pops a heap until it is empty.
///
/// Created by [`drain_sorted`].
pub struct DrainSorted<'a, S: NodeStore + ?Sized, F> {
    store: &'a mut S,
    heap: &'a mut Heap<S::Key>,
    cmp: F,
}

impl<S, F> Iterator for DrainSorted<'_, S, F>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = S::Key;

    fn next(&mut self) -> Option<S::Key> {
        let root = pop(&mut *self.store, &mut *self.heap, &mut self.cmp);
        if root.is_none() {
            trace!("heap drained");
        }
        root
    }
}

/// Pops every node of `heap` in comparator order.
///
/// Nodes that are not yielded (because the iterator is dropped early) stay
/// in `heap`.
pub fn drain_sorted<'a, S, F>(
    store: &'a mut S,
    heap: &'a mut Heap<S::Key>,
    cmp: F,
) -> DrainSorted<'a, S, F>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    DrainSorted { store, heap, cmp }
}

/// Checks the structure of `heap`.
///
/// # Errors
/// - [`HeapError::RootHasSibling`] if the root is still linked into a
///   sibling list
/// - [`HeapError::OrderViolated`] if any child is strictly preferred over
///   its parent
pub fn validate<S, F>(store: &S, heap: Heap<S::Key>, mut cmp: F) -> Result<(), HeapError>
where
    S: NodeStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let root = match heap {
        Heap::Empty => return Ok(()),
        Heap::Root(root) => root,
    };
    if store.sibling(root).is_some() {
        return Err(HeapError::RootHasSibling);
    }

    for parent in nodes(store, heap) {
        let mut child = store.children(parent);
        while let Some(node) = child {
            if cmp(store.item(node), store.item(parent)) {
                return Err(HeapError::OrderViolated);
            }
            child = store.sibling(node);
        }
    }
    Ok(())
}
