//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped API over any [`Heap`].
//!
//! # Differences from BinaryHeap
//!
//! - **Mergeable**: [`StdHeap::append`] runs in O(log n) for the leftist
//!   backends rather than `BinaryHeap`'s O(n + m).
//! - **No iteration**: elements can only be observed through `peek` and `pop`.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::stdlib_compat::StdHeap;
//! use leftist_heap::leftist::LeftistHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, LeftistHeap<i32>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.pop(), Some(5));
//! ```

use crate::traits::Heap;

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// `peek` and `pop` return `Option` instead of reporting
/// [`HeapError::Empty`](crate::HeapError::Empty).
///
/// # Type Parameters
/// - `T`: The element type
/// - `H`: The underlying heap implementation (e.g., `LeftistHeap<T>`)
pub struct StdHeap<T, H: Heap<T>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, H: Heap<T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the greatest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.top().ok()
    }

    /// Removes and returns the greatest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    /// Moves all elements of `other` into `self`, leaving `other` empty
    pub fn append(&mut self, other: &mut Self) {
        self.heap.append(&mut other.heap)
    }

    /// Drops all items from the heap
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Returns the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T, H: Heap<T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
