//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! subtree has a null path length (npl) at least as large as its right
//! subtree's. That keeps the right spine at O(log n) nodes, and since merge
//! only ever walks right spines, merging two heaps costs O(log n).
//!
//! Every mutating operation is expressed in terms of merge:
//!
//! - `push` merges the root with a fresh singleton node
//! - `pop` detaches the root and merges its two subtrees
//! - `append` merges two roots
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `push`        | O(log n)   |
//! | `pop`         | O(log n)   |
//! | `top`/`peek`  | O(1)       |
//! | `append`      | O(log n)   |
//! | `clone`       | O(n)       |
//! | `from_iter`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::leftist::LeftistHeap;
//!
//! let mut a: LeftistHeap<i32> = [1, 3, 5].into_iter().collect();
//! let mut b: LeftistHeap<i32> = [2, 4].into_iter().collect();
//!
//! a.append(&mut b);
//! assert_eq!(a.top(), Ok(&5));
//! assert!(b.is_empty());
//!
//! let mut drained = Vec::new();
//! while let Ok(value) = a.pop() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![5, 4, 3, 2, 1]);
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

/// Inline capacity of the explicit stacks used by tree walks
const WALK_STACK: usize = 32;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    /// Null path length; 0 when either child is missing
    npl: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn singleton(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            npl: 0,
            left: None,
            right: None,
        })
    }

    /// Swaps children if the right one has the longer null path, then recomputes npl
    ///
    /// `None < Some(_)` gives a missing child the lowest rank, which is exactly
    /// the "absent child has npl -1" convention.
    fn restore_leftist(&mut self) {
        let left_npl = self.left.as_ref().map(|n| n.npl);
        let right_npl = self.right.as_ref().map(|n| n.npl);
        if left_npl < right_npl {
            mem::swap(&mut self.left, &mut self.right);
        }
        self.npl = match (&self.left, &self.right) {
            (Some(l), Some(r)) => l.npl.min(r.npl) + 1,
            _ => 0,
        };
    }
}

/// Merges two fragments, consuming both
///
/// Recursion only follows right spines, so the depth is bounded by the sum of
/// the two right-spine lengths.
fn merge_links<T, C: Compare<T>>(cmp: &C, x: Link<T>, y: Link<T>) -> Link<T> {
    match (x, y) {
        (None, y) => y,
        (x, None) => x,
        (Some(x), Some(y)) => Some(merge_nodes(cmp, x, y)),
    }
}

fn merge_nodes<T, C: Compare<T>>(
    cmp: &C,
    mut x: Box<Node<T>>,
    mut y: Box<Node<T>>,
) -> Box<Node<T>> {
    // Ties keep `x` on top
    if cmp.less(&x.value, &y.value) {
        mem::swap(&mut x, &mut y);
    }
    let right = match x.right.take() {
        Some(right) => merge_nodes(cmp, right, y),
        None => y,
    };
    x.right = Some(right);
    x.restore_leftist();
    x
}

/// Destroys a tree children-first without recursing
fn drop_tree<T>(root: Link<T>) {
    let mut stack: SmallVec<[Box<Node<T>>; WALK_STACK]> = SmallVec::new();
    stack.extend(root);
    while let Some(mut node) = stack.pop() {
        if node.left.is_none() && node.right.is_none() {
            drop(node);
            continue;
        }
        let left = node.left.take();
        let right = node.right.take();
        stack.push(node);
        stack.extend(left);
        stack.extend(right);
    }
}

/// Duplicates a tree node for node, keeping every npl and child position
fn clone_tree<T: Clone>(root: &Link<T>) -> Link<T> {
    let root = root.as_deref()?;

    // (node, children already cloned)
    let mut work: SmallVec<[(&Node<T>, bool); WALK_STACK]> = SmallVec::new();
    let mut built: SmallVec<[Box<Node<T>>; WALK_STACK]> = SmallVec::new();
    work.push((root, false));

    while let Some((node, expanded)) = work.pop() {
        if !expanded {
            work.push((node, true));
            if let Some(right) = node.right.as_deref() {
                work.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                work.push((left, false));
            }
            continue;
        }
        // Left subtree finished first, so its copy sits below the right one
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(Node {
            value: node.value.clone(),
            npl: node.npl,
            left,
            right,
        }));
    }

    built.pop()
}

/// Builds a heap from singletons by merging them pairwise, round-robin
///
/// Each round halves the number of fragments, which gives O(n) total work.
fn build_tree<T, C: Compare<T>>(
    cmp: &C,
    values: impl IntoIterator<Item = T>,
) -> (Link<T>, usize) {
    let mut queue: VecDeque<Box<Node<T>>> = values.into_iter().map(Node::singleton).collect();
    let len = queue.len();
    while queue.len() > 1 {
        if let (Some(a), Some(b)) = (queue.pop_front(), queue.pop_front()) {
            queue.push_back(merge_nodes(cmp, a, b));
        }
    }
    (queue.pop_front(), len)
}

/// Leftist Heap
///
/// A max-heap with respect to `C`: [`top`](Self::top) returns the element that
/// no other element is greater than. Use [`Reverse`](crate::compare::Reverse)
/// for a min-heap.
///
/// # Example
///
/// ```rust
/// use leftist_heap::leftist::LeftistHeap;
/// use leftist_heap::HeapError;
///
/// let mut heap = LeftistHeap::new();
/// for value in [3, 1, 4, 1, 5, 9, 2, 6] {
///     heap.push(value);
/// }
/// assert_eq!(heap.len(), 8);
/// assert_eq!(heap.pop(), Ok(9));
/// assert_eq!(heap.pop(), Ok(6));
///
/// let empty: LeftistHeap<i32> = LeftistHeap::new();
/// assert_eq!(empty.top(), Err(HeapError::Empty));
/// ```
pub struct LeftistHeap<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> LeftistHeap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the comparator used to order elements
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the greatest element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the greatest element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.value)
    }

    /// Removes every element, dropping children before their parents
    pub fn clear(&mut self) {
        drop_tree(self.root.take());
        self.len = 0;
    }
}

impl<T, C: Compare<T>> LeftistHeap<T, C> {
    /// Inserts an element
    pub fn push(&mut self, value: T) {
        let node = Node::singleton(value);
        self.len += 1;
        self.root = merge_links(&self.cmp, self.root.take(), Some(node));
    }

    /// Removes and returns the greatest element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::Empty)?;
        let Node {
            value, left, right, ..
        } = *root;
        self.len -= 1;
        self.root = merge_links(&self.cmp, left, right);
        Ok(value)
    }

    /// Moves every element of `other` into this heap in O(log n), leaving `other` empty
    ///
    /// Elements are ranked by this heap's comparator; both heaps are expected
    /// to order elements the same way.
    pub fn append(&mut self, other: &mut Self) {
        let other_root = other.root.take();
        let other_len = mem::take(&mut other.len);
        self.root = merge_links(&self.cmp, self.root.take(), other_root);
        self.len += other_len;
    }

    /// Checks heap order, the leftist property, npl bookkeeping and the element count
    ///
    /// Walks the whole tree; intended for tests and debugging.
    pub fn verify_invariants(&self) -> bool {
        let mut stack: SmallVec<[&Node<T>; WALK_STACK]> = SmallVec::new();
        stack.extend(self.root.as_deref());
        let mut count = 0usize;

        while let Some(node) = stack.pop() {
            count += 1;

            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                if self.cmp.less(&node.value, &child.value) {
                    return false;
                }
                stack.push(child);
            }

            let left_npl = node.left.as_ref().map(|n| n.npl);
            let right_npl = node.right.as_ref().map(|n| n.npl);
            if left_npl < right_npl {
                return false;
            }
            let expected = match (left_npl, right_npl) {
                (Some(l), Some(r)) => l.min(r) + 1,
                _ => 0,
            };
            if node.npl != expected {
                return false;
            }
        }

        count == self.len && self.root.is_none() == (self.len == 0)
    }
}

impl<T: Clone, C: Compare<T> + Clone> LeftistHeap<T, C> {
    /// Copies the heap by pushing every element into a fresh heap
    ///
    /// O(n log n), and the resulting shape generally differs from `self`.
    /// [`Clone`] duplicates the tree directly in O(n); this is the slower
    /// reference strategy it is checked against.
    pub fn clone_by_reinsertion(&self) -> Self {
        let mut copy = Self::with_comparator(self.cmp.clone());
        let mut stack: SmallVec<[&Node<T>; WALK_STACK]> = SmallVec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            copy.push(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        copy
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        drop_tree(self.root.take());
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: clone_tree(&self.root),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.cmp = source.cmp.clone();
        self.root = clone_tree(&source.root);
        self.len = source.len;
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for LeftistHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let cmp = C::default();
        let (root, len) = build_tree(&cmp, iter);
        Self { root, len, cmp }
    }
}

impl<T, C: Compare<T>> Extend<T> for LeftistHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let (batch, batch_len) = build_tree(&self.cmp, iter);
        self.root = merge_links(&self.cmp, self.root.take(), batch);
        self.len += batch_len;
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for LeftistHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        LeftistHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        LeftistHeap::len(self)
    }

    fn push(&mut self, value: T) {
        LeftistHeap::push(self, value)
    }

    fn top(&self) -> Result<&T, HeapError> {
        LeftistHeap::top(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        LeftistHeap::pop(self)
    }

    fn append(&mut self, other: &mut Self) {
        LeftistHeap::append(self, other)
    }

    fn clear(&mut self) {
        LeftistHeap::clear(self)
    }
}
