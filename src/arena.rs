//! Arena-backed Leftist Heap
//!
//! Same algorithm as [`LeftistHeap`](crate::leftist::LeftistHeap), but nodes
//! live in a [`SlotMap`] and children are referenced by key instead of by
//! `Box`. Popped slots go back on the slotmap's free list and are reused by
//! later pushes, so a heap that churns at a steady size stops allocating.
//!
//! # Characteristics
//! - Contiguous node storage (better cache locality, no per-node allocation)
//! - Cloning copies the arena wholesale, keeping the tree shape
//! - Keys are local to one arena, so [`append`](ArenaLeftistHeap::append)
//!   relocates the smaller heap's nodes: O(min(n, m)) moves plus an O(log n) merge
//!
//! # Feature Flag
//! Requires the `arena-storage` feature (enabled by default).
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::arena::ArenaLeftistHeap;
//!
//! let mut heap = ArenaLeftistHeap::new();
//! heap.push("b");
//! heap.push("c");
//! heap.push("a");
//! assert_eq!(heap.pop(), Ok("c"));
//! assert_eq!(heap.top(), Ok(&"b"));
//! ```

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

new_key_type! {
    struct NodeKey;
}

type Nodes<T> = SlotMap<NodeKey, ArenaNode<T>>;

#[derive(Clone)]
struct ArenaNode<T> {
    value: T,
    npl: usize,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

fn npl_of<T>(nodes: &Nodes<T>, key: Option<NodeKey>) -> Option<usize> {
    key.map(|k| nodes[k].npl)
}

fn restore_leftist<T>(nodes: &mut Nodes<T>, key: NodeKey) {
    let left_npl = npl_of(nodes, nodes[key].left);
    let right_npl = npl_of(nodes, nodes[key].right);
    let node = &mut nodes[key];
    if left_npl < right_npl {
        mem::swap(&mut node.left, &mut node.right);
    }
    node.npl = match (left_npl, right_npl) {
        (Some(l), Some(r)) => l.min(r) + 1,
        _ => 0,
    };
}

fn merge_links<T, C: Compare<T>>(
    nodes: &mut Nodes<T>,
    cmp: &C,
    x: Option<NodeKey>,
    y: Option<NodeKey>,
) -> Option<NodeKey> {
    match (x, y) {
        (None, y) => y,
        (x, None) => x,
        (Some(x), Some(y)) => Some(merge_keys(nodes, cmp, x, y)),
    }
}

fn merge_keys<T, C: Compare<T>>(nodes: &mut Nodes<T>, cmp: &C, x: NodeKey, y: NodeKey) -> NodeKey {
    let (x, y) = if cmp.less(&nodes[x].value, &nodes[y].value) {
        (y, x)
    } else {
        (x, y)
    };
    let right = match nodes[x].right.take() {
        Some(right) => merge_keys(nodes, cmp, right, y),
        None => y,
    };
    nodes[x].right = Some(right);
    restore_leftist(nodes, x);
    x
}

fn singleton<T>(nodes: &mut Nodes<T>, value: T) -> NodeKey {
    nodes.insert(ArenaNode {
        value,
        npl: 0,
        left: None,
        right: None,
    })
}

/// Arena-backed Leftist Heap
///
/// A max-heap with respect to `C`, with the same contract as
/// [`LeftistHeap`](crate::leftist::LeftistHeap).
pub struct ArenaLeftistHeap<T, C = Natural> {
    nodes: Nodes<T>,
    root: Option<NodeKey>,
    cmp: C,
}

impl<T> ArenaLeftistHeap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> ArenaLeftistHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            cmp,
        }
    }

    /// Creates an empty heap with room for `capacity` nodes before reallocating
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            root: None,
            cmp,
        }
    }

    /// Returns the comparator used to order elements
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes the arena can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
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
        self.root.map(|root| &self.nodes[root].value)
    }

    /// Removes every element, dropping children before their parents
    ///
    /// The arena keeps its capacity.
    pub fn clear(&mut self) {
        let mut stack: SmallVec<[NodeKey; 32]> = SmallVec::new();
        stack.extend(self.root.take());
        while let Some(&key) = stack.last() {
            let children = {
                let node = &mut self.nodes[key];
                (node.left.take(), node.right.take())
            };
            match children {
                (None, None) => {
                    stack.pop();
                    self.nodes.remove(key);
                }
                (left, right) => {
                    stack.extend(left);
                    stack.extend(right);
                }
            }
        }
        self.nodes.clear();
    }
}

impl<T, C: Compare<T>> ArenaLeftistHeap<T, C> {
    /// Inserts an element, reusing a freed slot when one is available
    pub fn push(&mut self, value: T) {
        let node = singleton(&mut self.nodes, value);
        self.root = merge_links(&mut self.nodes, &self.cmp, self.root, Some(node));
    }

    /// Removes and returns the greatest element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let root = self.root.ok_or(HeapError::Empty)?;
        let node = self.nodes.remove(root).ok_or(HeapError::Empty)?;
        self.root = merge_links(&mut self.nodes, &self.cmp, node.left, node.right);
        Ok(node.value)
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// The smaller of the two arenas is relocated into the larger one before
    /// the roots are merged. Elements are ranked by this heap's comparator.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.nodes.len() < other.nodes.len() {
            mem::swap(&mut self.nodes, &mut other.nodes);
            mem::swap(&mut self.root, &mut other.root);
        }

        let mut remap: SecondaryMap<NodeKey, NodeKey> =
            SecondaryMap::with_capacity(other.nodes.len());
        let mut moved: Vec<NodeKey> = Vec::with_capacity(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            let new = self.nodes.insert(node);
            remap.insert(old, new);
            moved.push(new);
        }
        for key in moved {
            let node = &mut self.nodes[key];
            node.left = node.left.and_then(|k| remap.get(k).copied());
            node.right = node.right.and_then(|k| remap.get(k).copied());
        }

        let other_root = other.root.take().and_then(|k| remap.get(k).copied());
        self.root = merge_links(&mut self.nodes, &self.cmp, self.root, other_root);
    }

    /// Checks heap order, the leftist property, npl bookkeeping, and that every
    /// slot in the arena is reachable from the root
    pub fn verify_invariants(&self) -> bool {
        let mut stack: SmallVec<[NodeKey; 32]> = SmallVec::new();
        stack.extend(self.root);
        let mut count = 0usize;

        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                return false;
            };
            count += 1;

            for child in [node.left, node.right].into_iter().flatten() {
                match self.nodes.get(child) {
                    Some(c) if !self.cmp.less(&node.value, &c.value) => stack.push(child),
                    _ => return false,
                }
            }

            let left_npl = node.left.and_then(|k| self.nodes.get(k)).map(|n| n.npl);
            let right_npl = node.right.and_then(|k| self.nodes.get(k)).map(|n| n.npl);
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

        count == self.nodes.len()
    }
}

impl<T, C> Drop for ArenaLeftistHeap<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, C: Clone> Clone for ArenaLeftistHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.nodes.clone_from(&source.nodes);
        self.root = source.root;
        self.cmp = source.cmp.clone();
    }
}

impl<T, C: Default> Default for ArenaLeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ArenaLeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaLeftistHeap")
            .field("len", &self.len())
            .field("top", &self.peek())
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for ArenaLeftistHeap<T, C> {
    /// Builds the new elements into their own tree by pairwise merging, then
    /// merges that tree into the heap
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut queue: VecDeque<NodeKey> = iter
            .into_iter()
            .map(|value| singleton(&mut self.nodes, value))
            .collect();
        while queue.len() > 1 {
            if let (Some(a), Some(b)) = (queue.pop_front(), queue.pop_front()) {
                queue.push_back(merge_keys(&mut self.nodes, &self.cmp, a, b));
            }
        }
        self.root = merge_links(&mut self.nodes, &self.cmp, self.root, queue.pop_front());
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for ArenaLeftistHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for ArenaLeftistHeap<T, C> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        ArenaLeftistHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        ArenaLeftistHeap::len(self)
    }

    fn push(&mut self, value: T) {
        ArenaLeftistHeap::push(self, value)
    }

    fn top(&self) -> Result<&T, HeapError> {
        ArenaLeftistHeap::top(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        ArenaLeftistHeap::pop(self)
    }

    fn append(&mut self, other: &mut Self) {
        ArenaLeftistHeap::append(self, other)
    }

    fn clear(&mut self) {
        ArenaLeftistHeap::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reverse;

    fn drain<T, C: Compare<T>>(heap: &mut ArenaLeftistHeap<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(value) = heap.pop() {
            out.push(value);
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = ArenaLeftistHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.top(), Err(HeapError::Empty));

        for value in [3, 1, 4, 1, 5, 9, 2, 6] {
            heap.push(value);
            assert!(heap.verify_invariants());
        }
        assert_eq!(heap.len(), 8);
        assert_eq!(heap.top(), Ok(&9));
        assert_eq!(drain(&mut heap), vec![9, 6, 5, 4, 3, 2, 1, 1]);
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_pop_keeps_root_consistent() {
        let mut heap = ArenaLeftistHeap::new();
        heap.push(2);
        heap.push(7);

        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.top(), Ok(&2));
        assert_eq!(heap.len(), 1);
        assert!(heap.verify_invariants());

        assert_eq!(heap.pop(), Ok(2));
        assert!(heap.root.is_none());
        assert_eq!(heap.len(), 0);

        // Failed pops leave the heap usable
        for _ in 0..3 {
            assert_eq!(heap.pop(), Err(HeapError::Empty));
            assert!(heap.verify_invariants());
        }
        heap.push(4);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop(), Ok(4));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut heap = ArenaLeftistHeap::with_capacity_and_comparator(16, Natural);
        for i in 0..16 {
            heap.push(i);
        }
        let capacity = heap.capacity();
        for round in 0..100 {
            heap.pop().unwrap();
            heap.push(round);
        }
        assert_eq!(heap.len(), 16);
        assert_eq!(heap.capacity(), capacity);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_append_relocates_nodes() {
        let mut a: ArenaLeftistHeap<i32> = [1, 3, 5].into_iter().collect();
        let mut b: ArenaLeftistHeap<i32> = [2, 4].into_iter().collect();

        a.append(&mut b);
        assert_eq!(a.len(), 5);
        assert_eq!(a.top(), Ok(&5));
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert!(a.verify_invariants());

        a.append(&mut b);
        assert_eq!(a.len(), 5);
        assert_eq!(drain(&mut a), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_append_into_smaller_heap() {
        let mut small: ArenaLeftistHeap<i32> = [7].into_iter().collect();
        let mut large: ArenaLeftistHeap<i32> = (0..50).collect();

        small.append(&mut large);
        assert_eq!(small.len(), 51);
        assert!(large.is_empty());
        assert!(small.verify_invariants());
        assert!(large.verify_invariants());
        assert_eq!(small.top(), Ok(&49));

        // The emptied heap is still usable
        large.push(-1);
        assert_eq!(large.top(), Ok(&-1));
    }

    #[test]
    fn test_clone_is_independent() {
        let a: ArenaLeftistHeap<i32> = (0..20).collect();
        let mut b = a.clone();
        assert!(b.verify_invariants());
        b.pop().unwrap();
        b.push(99);
        assert_eq!(a.len(), 20);
        assert_eq!(a.top(), Ok(&19));
        assert_eq!(b.top(), Ok(&99));

        let mut c: ArenaLeftistHeap<i32> = (100..110).collect();
        c.clone_from(&a);
        assert_eq!(c.len(), 20);
        assert!(c.verify_invariants());
        assert_eq!(c.top(), Ok(&19));
    }

    #[test]
    fn test_min_heap() {
        let mut heap = ArenaLeftistHeap::with_comparator(Reverse(Natural));
        heap.extend([4, 2, 8, 6]);
        assert_eq!(drain(&mut heap), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_clear_keeps_heap_usable() {
        let mut heap: ArenaLeftistHeap<String> =
            ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        heap.push("w".to_string());
        assert_eq!(heap.top().map(String::as_str), Ok("w"));
    }
}
