//! The heap handle
//!
//! A heap is nothing more than a reference to its root node. [`Heap`] makes
//! the empty state explicit so it can never be confused with a populated
//! heap whose root key happens to look like a null value.

/// A pairing heap, represented by its root node or by nothing at all
///
/// The heap does not own its nodes: it is a `Copy` view over links that live
/// in a [`NodeStore`](crate::NodeStore). Dropping a `Heap` leaves the nodes
/// untouched.
///
/// # Example
///
/// ```rust
/// use intrusive_pairing_heap::Heap;
///
/// let heap: Heap<usize> = Heap::Empty;
/// assert!(heap.is_empty());
/// assert_eq!(heap.root(), None);
///
/// let heap = Heap::Root(3usize);
/// assert_eq!(heap.root(), Some(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heap<K> {
    /// No elements
    Empty,
    /// A heap-ordered tree rooted at this node
    Root(K),
}

impl<K: Copy> Heap<K> {
    /// Returns true if the heap holds no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Heap::Empty)
    }

    /// Returns the root, which is the preferred element under the comparator
    /// the heap was built with
    ///
    /// # Time Complexity
    /// O(1)
    #[inline]
    pub fn root(&self) -> Option<K> {
        match *self {
            Heap::Empty => None,
            Heap::Root(root) => Some(root),
        }
    }

    /// Alias for [`root`](Self::root)
    #[inline]
    pub fn peek(&self) -> Option<K> {
        self.root()
    }

    /// Takes the heap out, leaving `Empty` in its place
    #[inline]
    pub fn take(&mut self) -> Heap<K> {
        std::mem::take(self)
    }
}

impl<K> Default for Heap<K> {
    #[inline]
    fn default() -> Self {
        Heap::Empty
    }
}

impl<K> From<Option<K>> for Heap<K> {
    #[inline]
    fn from(root: Option<K>) -> Self {
        match root {
            Some(root) => Heap::Root(root),
            None => Heap::Empty,
        }
    }
}

impl<K> From<Heap<K>> for Option<K> {
    #[inline]
    fn from(heap: Heap<K>) -> Self {
        match heap {
            Heap::Empty => None,
            Heap::Root(root) => Some(root),
        }
    }
}
