//! Heapsort drivers built on [`MinHeap`].
//!
//! Neither sort is stable.
//!
//! ```
//! use anchor_collections::{heapsort_aux, heapsort_in_place};
//!
//! assert_eq!(heapsort_aux([10, 15, 8, 20, 17]), vec![8, 10, 15, 17, 20]);
//!
//! let mut values = [100, 230, 44, 1, 74, 12013, 84];
//! heapsort_in_place(&mut values);
//! assert_eq!(values, [1, 44, 74, 84, 100, 230, 12013]);
//! ```

use crate::MinHeap;
use crate::heap::{heapify, sift_down};

/// Sorts `values` ascending by adding them all to a fresh heap and polling
/// it dry.
///
/// O(n log n) time, O(n) extra space.
pub fn heapsort_aux<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut heap: MinHeap<T> = values.into_iter().collect();
    let mut sorted = Vec::with_capacity(heap.len());

    while let Some(value) = heap.poll() {
        sorted.push(value);
    }

    sorted
}

/// Sorts `values` ascending using the slice itself as heap storage.
///
/// The slice is first ordered into a min-heap in O(n). Each extraction then
/// swaps the root with the last element of the shrinking heap region,
/// which leaves the slice in descending order; a final reverse makes it
/// ascending.
///
/// O(n log n) time, O(1) extra space.
pub fn heapsort_in_place<T: Ord>(values: &mut [T]) {
    heapify(values);

    for end in (1..values.len()).rev() {
        values.swap(0, end);
        sift_down(&mut values[..end], 0);
    }

    values.reverse();
}
