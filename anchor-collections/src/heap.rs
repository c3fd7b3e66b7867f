//! Array-backed binary min-heap.
//!
//! Elements sit in a single `Vec` in level order: the children of `i` are
//! at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The vector only
//! grows or shrinks at the tail, so the tree is always complete.
//!
//! # Example
//!
//! ```
//! use anchor_collections::MinHeap;
//!
//! let mut heap: MinHeap<u64> = MinHeap::new();
//! heap.add(5);
//! heap.add(1);
//! heap.add(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(3));
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.poll(), None);
//! ```
//!
//! # Bulk construction
//!
//! Collecting from an iterator inserts one element at a time, O(n log n).
//! [`MinHeap::heapify`] takes ownership of a `Vec` and orders it in place
//! in O(n).
//!
//! ```
//! use anchor_collections::MinHeap;
//!
//! let heap = MinHeap::heapify(vec![100, 230, 44, 1, 74, 12013, 84]);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 44, 74, 84, 100, 230, 12013]);
//! ```

use core::iter::FusedIterator;

/// A binary min-heap over a `Vec`.
///
/// The smallest element is always at the root. Equal elements come out in
/// no particular order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// Level-order complete binary tree.
    nodes: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[inline]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a heap with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from `values` in O(n), reusing its allocation.
    pub fn heapify(mut values: Vec<T>) -> Self {
        heapify(&mut values);
        Self { nodes: values }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the minimum element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Inserts an element. O(log n).
    pub fn add(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the minimum element. O(log n).
    ///
    /// The last element takes the root's slot and sifts down.
    /// Returns `None` if the heap is empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }

        let root = self.nodes.swap_remove(0);
        sift_down(&mut self.nodes, 0);
        Some(root)
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns the elements in level order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    /// Consumes the heap, returning the elements in level order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    /// Consumes the heap, returning the elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, yielding elements by repeated [`poll`](Self::poll).
    #[inline]
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { inner: self }
    }

    #[inline]
    fn has_parent(&self, index: usize) -> bool {
        index > 0 && index < self.nodes.len()
    }

    #[inline]
    fn has_left_child(&self, index: usize) -> bool {
        has_left_child(index, self.nodes.len())
    }

    #[inline]
    fn has_right_child(&self, index: usize) -> bool {
        has_right_child(index, self.nodes.len())
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(
            a < self.nodes.len() && b < self.nodes.len(),
            "swap ({a}, {b}) outside heap of length {}",
            self.nodes.len()
        );
        self.nodes.swap(a, b);
    }

    /// Moves the element at `pos` toward the root while it is strictly
    /// smaller than its parent.
    #[inline]
    fn sift_up(&mut self, pos: usize) {
        let mut child = pos;

        while self.has_parent(child) {
            let parent = parent_index(child);
            if self.nodes[child] < self.nodes[parent] {
                self.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }

        debug_assert!(
            !self.has_left_child(child) || self.nodes[child] <= self.nodes[left_child_index(child)]
        );
        debug_assert!(
            !self.has_right_child(child)
                || self.nodes[child] <= self.nodes[right_child_index(child)]
        );
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    /// Inserts each value through [`add`](MinHeap::add).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Same as [`MinHeap::heapify`].
    fn from(values: Vec<T>) -> Self {
        Self::heapify(values)
    }
}

/// Iterator that drains a heap in ascending order.
///
/// Created by [`MinHeap::into_iter_sorted`].
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T> {
    inner: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.poll()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

// =============================================================================
// Slice-level heap operations
// =============================================================================

#[inline]
const fn left_child_index(parent: usize) -> usize {
    2 * parent + 1
}

#[inline]
const fn right_child_index(parent: usize) -> usize {
    2 * parent + 2
}

#[inline]
const fn parent_index(child: usize) -> usize {
    (child - 1) / 2
}

#[inline]
const fn has_left_child(index: usize, len: usize) -> bool {
    left_child_index(index) < len
}

#[inline]
const fn has_right_child(index: usize, len: usize) -> bool {
    right_child_index(index) < len
}

/// Moves the element at `pos` toward the leaves of the heap `nodes`.
///
/// At each level the smaller child is chosen; the right child wins only if
/// it is strictly smaller than the left. The element swaps down while it is
/// strictly greater than that child.
pub(crate) fn sift_down<T: Ord>(nodes: &mut [T], pos: usize) {
    let len = nodes.len();
    let mut parent = pos;

    while has_left_child(parent, len) {
        let left = left_child_index(parent);
        let right = right_child_index(parent);

        let smaller = if has_right_child(parent, len) && nodes[right] < nodes[left] {
            right
        } else {
            left
        };

        if nodes[parent] > nodes[smaller] {
            nodes.swap(parent, smaller);
            parent = smaller;
        } else {
            break;
        }
    }
}

/// Orders `nodes` into a min-heap in O(n).
///
/// Sifts down every index from `len / 2` to `0`.
pub(crate) fn heapify<T: Ord>(nodes: &mut [T]) {
    for pos in (0..=nodes.len() / 2).rev() {
        sift_down(nodes, pos);
    }
}

#[cfg(test)]
pub(crate) fn is_min_heap<T: Ord>(nodes: &[T]) -> bool {
    (1..nodes.len()).all(|child| nodes[parent_index(child)] <= nodes[child])
}
