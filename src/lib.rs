//! Mergeable priority queues backed by leftist heaps
//!
//! A leftist heap is a heap-ordered binary tree whose right spine is kept at
//! O(log n) nodes. Merging two heaps only walks right spines, so combining two
//! whole heaps costs O(log n), and push and pop reduce to a single merge each.
//!
//! # Features
//!
//! - **[`LeftistHeap`](leftist::LeftistHeap)**: Box-owned nodes; O(log n) push, pop and merge
//! - **[`ArenaLeftistHeap`](arena::ArenaLeftistHeap)**: the same tree stored in a slot arena
//!   with a free list (feature `arena-storage`, on by default)
//! - **Custom ordering** through the [`Compare`](compare::Compare) trait; the default
//!   [`Natural`](compare::Natural) order makes a max-heap
//! - **[`StdHeap`](stdlib_compat::StdHeap)**: `BinaryHeap`-style `Option` API over either backend
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::leftist::LeftistHeap;
//! use leftist_heap::HeapError;
//!
//! let mut a = LeftistHeap::new();
//! let mut b = LeftistHeap::new();
//! a.push(1);
//! a.push(5);
//! b.push(3);
//!
//! a.append(&mut b);
//! assert_eq!(a.top(), Ok(&5));
//! assert!(b.is_empty());
//! assert_eq!(b.pop(), Err(HeapError::Empty));
//! ```

#[cfg(feature = "arena-storage")]
pub mod arena;
pub mod compare;
pub mod leftist;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{Heap, HeapError};
