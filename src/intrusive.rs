//! Records that embed their own heap links.
//!
//! A record opts in by holding one [`PairingLink`] and implementing
//! [`Linked`] to expose it. Links point straight at the owning records, so
//! the heap can hand a node back to the comparator without any
//! address-of-container arithmetic.
//!
//! The records are borrowed, never moved or freed: they can live on the
//! stack, in a `Vec`, or in any arena the caller likes, as long as they
//! outlive the heap that links them.
//!
//! # Example
//!
//! ```rust
//! use intrusive_pairing_heap::intrusive::{Intrusive, Linked, NodeRef, PairingLink};
//! use intrusive_pairing_heap::{pairing, Heap};
//!
//! struct Sample<'a> {
//!     value: i32,
//!     link: PairingLink<'a, Sample<'a>>,
//! }
//!
//! impl<'a> Linked<'a> for Sample<'a> {
//!     fn pairing_link(&self) -> &PairingLink<'a, Self> {
//!         &self.link
//!     }
//! }
//!
//! fn by_value(a: &Sample<'_>, b: &Sample<'_>) -> bool {
//!     a.value < b.value
//! }
//!
//! let samples = [5, 3, 8, 1].map(|value| Sample { value, link: PairingLink::new() });
//!
//! let mut store = Intrusive::new();
//! let mut heap = Heap::Empty;
//! for sample in &samples {
//!     heap = pairing::insert(&mut store, heap, NodeRef::new(sample), by_value);
//! }
//!
//! let mut order = Vec::new();
//! while let Some(min) = pairing::pop(&mut store, &mut heap, by_value) {
//!     order.push(min.value);
//! }
//! assert_eq!(order, vec![1, 3, 5, 8]);
//! ```

use crate::traits::NodeStore;
use core::cell::Cell;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;
use core::ptr;

// =============================================================================
// PairingLink
// =============================================================================

/// Intrusive link that lets a record of type `T` take part in a pairing heap.
///
/// A detached link has neither children nor a sibling. Links are updated
/// through shared references, so a linked record stays borrowable while it
/// sits in a heap.
pub struct PairingLink<'a, T> {
    children: Cell<Option<&'a T>>,
    sibling: Cell<Option<&'a T>>,
}

impl<'a, T> PairingLink<'a, T> {
    /// Creates a new detached `PairingLink`.
    #[inline]
    pub const fn new() -> Self {
        PairingLink {
            children: Cell::new(None),
            sibling: Cell::new(None),
        }
    }

    /// Checks whether the link has neither children nor a sibling.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.children.get().is_none() && self.sibling.get().is_none()
    }

    /// Gets the head of the child list.
    #[inline]
    pub fn children(&self) -> Option<&'a T> {
        self.children.get()
    }

    /// Gets the next record in the sibling list.
    #[inline]
    pub fn sibling(&self) -> Option<&'a T> {
        self.sibling.get()
    }
}

impl<T> Default for PairingLink<'_, T> {
    #[inline]
    fn default() -> Self {
        PairingLink::new()
    }
}

impl<T> Clone for PairingLink<'_, T> {
    /// Cloning a link creates a new detached link.
    #[inline]
    fn clone(&self) -> Self {
        PairingLink::new()
    }
}

// Prints only which links are set; following them could walk the whole heap.
impl<T> fmt::Debug for PairingLink<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingLink")
            .field("has_children", &self.children.get().is_some())
            .field("has_sibling", &self.sibling.get().is_some())
            .finish()
    }
}

// =============================================================================
// Linked
// =============================================================================

/// A record that carries a [`PairingLink`] to itself.
///
/// Implementations must return the same link on every call.
pub trait Linked<'a>: Sized {
    /// The record's embedded heap link
    fn pairing_link(&self) -> &PairingLink<'a, Self>;
}

// =============================================================================
// NodeRef
// =============================================================================

/// A borrowed record used as a heap key.
///
/// Two `NodeRef`s are equal when they point at the same record, regardless
/// of the record's contents.
pub struct NodeRef<'a, T>(&'a T);

impl<'a, T> NodeRef<'a, T> {
    /// Wraps a borrowed record.
    #[inline]
    pub fn new(record: &'a T) -> Self {
        NodeRef(record)
    }

    /// Gets the record back with its full lifetime.
    #[inline]
    pub fn get(self) -> &'a T {
        self.0
    }
}

impl<T> Clone for NodeRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> Hash for NodeRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state);
    }
}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&(self.0 as *const T)).finish()
    }
}

impl<T> Deref for NodeRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0
    }
}

impl<'a, T> From<&'a T> for NodeRef<'a, T> {
    #[inline]
    fn from(record: &'a T) -> Self {
        NodeRef(record)
    }
}

// =============================================================================
// Intrusive
// =============================================================================

/// Node store for records that embed their links.
///
/// The store holds nothing: every link lives inside the records themselves.
/// It exists so intrusive records run through the same engine as arena
/// nodes.
pub struct Intrusive<'a, T> {
    _marker: PhantomData<&'a T>,
}

impl<T> Intrusive<'_, T> {
    /// Creates the store.
    #[inline]
    pub const fn new() -> Self {
        Intrusive {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Intrusive<'_, T> {
    #[inline]
    fn default() -> Self {
        Intrusive::new()
    }
}

impl<T> fmt::Debug for Intrusive<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Intrusive")
    }
}

impl<'a, T: Linked<'a>> NodeStore for Intrusive<'a, T> {
    type Key = NodeRef<'a, T>;
    type Item = T;

    #[inline]
    fn item(&self, key: Self::Key) -> &T {
        key.0
    }

    #[inline]
    fn children(&self, key: Self::Key) -> Option<Self::Key> {
        key.0.pairing_link().children.get().map(NodeRef)
    }

    #[inline]
    fn sibling(&self, key: Self::Key) -> Option<Self::Key> {
        key.0.pairing_link().sibling.get().map(NodeRef)
    }

    #[inline]
    fn set_children(&mut self, key: Self::Key, children: Option<Self::Key>) {
        key.0.pairing_link().children.set(children.map(NodeRef::get));
    }

    #[inline]
    fn set_sibling(&mut self, key: Self::Key, sibling: Option<Self::Key>) {
        key.0.pairing_link().sibling.set(sibling.map(NodeRef::get));
    }
}
