//! Common traits for mergeable heaps
//!
//! [`Heap`] is the contract shared by both leftist heap backends in this crate:
//!
//! - [`LeftistHeap`](crate::leftist::LeftistHeap): individually boxed nodes
//! - [`ArenaLeftistHeap`](crate::arena::ArenaLeftistHeap): nodes in a slot arena
//!
//! Both are *max*-heaps with respect to their comparator: the element ranked
//! greatest by [`Compare::less`](crate::compare::Compare::less) sits at the top.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap with no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "container is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for mergeable max-heaps
///
/// `top` and `pop` report [`HeapError::Empty`] instead of returning `Option`,
/// so that misuse on an empty heap is surfaced to the caller. Use
/// [`StdHeap`](crate::stdlib_compat::StdHeap) for a `BinaryHeap`-shaped API.
///
/// # Example
///
/// ```rust
/// use leftist_heap::{Heap, HeapError};
/// use leftist_heap::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.top(), Ok(&7));
/// assert_eq!(heap.pop(), Ok(7));
/// assert_eq!(heap.len(), 2);
///
/// heap.clear();
/// assert_eq!(heap.pop(), Err(HeapError::Empty));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap using the default comparator
    fn new() -> Self
    where
        Self: Sized;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, value: T);

    /// Returns the greatest element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the greatest element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// `other` stays usable as an empty heap afterwards.
    fn append(&mut self, other: &mut Self)
    where
        Self: Sized;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, mut other: Self)
    where
        Self: Sized,
    {
        self.append(&mut other);
    }

    /// Removes every element
    fn clear(&mut self);
}
