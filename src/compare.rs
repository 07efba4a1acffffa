//! Comparators for ordering heap elements
//!
//! A heap is parameterized by a [`Compare`] implementation rather than
//! requiring `T: Ord`, so the same element type can be ordered in several ways.
//! [`Natural`] is the default and yields a max-heap over `Ord` types.
//!
//! Comparators must describe a strict weak ordering. Elements that compare
//! equal may come out of the heap in any relative order.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::compare::{KeyCompare, Reverse, Natural};
//! use leftist_heap::leftist::LeftistHeap;
//!
//! // Min-heap
//! let mut heap = LeftistHeap::with_comparator(Reverse(Natural));
//! heap.push(3);
//! heap.push(1);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! // Longest string first
//! let mut heap = LeftistHeap::with_comparator(KeyCompare(|s: &&str| s.len()));
//! heap.push("ab");
//! heap.push("abcd");
//! heap.push("a");
//! assert_eq!(heap.peek(), Some(&"abcd"));
//! ```

/// Strict-weak-ordering predicate used to rank heap elements
///
/// `less(a, b)` returns true when `a` ranks strictly below `b`. The heap keeps
/// the element that is not less than any other at its top.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` ranks strictly below `b`
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if `a` ranks strictly above `b`
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }
}

impl<T: ?Sized, C> Compare<T> for &C
where
    C: Compare<T> + ?Sized,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        C::less(self, a, b)
    }
}

/// Orders elements by their [`Ord`] implementation (`a < b`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts the wrapped comparator, turning a max-heap into a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C> Compare<T> for Reverse<C>
where
    C: Compare<T>,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// Comparator backed by a `less`-style closure
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Comparator that orders elements by an extracted key
#[derive(Debug, Clone, Copy)]
pub struct KeyCompare<F>(pub F);

impl<T: ?Sized, F, K> Compare<T> for KeyCompare<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}
