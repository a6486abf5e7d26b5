//! Heap-backed top-k selection.
//!
//! A min-heap capped at `k` elements holds the largest elements seen so far;
//! draining it yields them in ascending order. With `k` equal to the input
//! length this degenerates into a full ascending sort, which is how Kruskal
//! orders its edges.

use crate::{error::SelectionError, heap::MinHeap};

/// Returns the `k` largest elements of `items` in ascending order.
///
/// When `items` holds fewer than `k` elements, all of them are returned.
/// The input is only borrowed and is never reordered.
///
/// # Errors
/// Returns [`SelectionError::NegativeCount`] when `k < 0`.
///
/// # Examples
/// ```
/// use graphkit_core::top_k;
///
/// let values = [7, 1, 9, 4, 9, 2];
/// assert_eq!(top_k(3, &values)?, vec![7, 9, 9]);
/// assert_eq!(top_k(10, &values)?.len(), values.len());
/// assert!(top_k(-1, &values).is_err());
/// # Ok::<(), graphkit_core::SelectionError>(())
/// ```
pub fn top_k<T: Ord + Clone>(k: isize, items: &[T]) -> Result<Vec<T>, SelectionError> {
    let count = usize::try_from(k).map_err(|_| SelectionError::NegativeCount { k })?;
    Ok(select_largest(count, items))
}

/// Returns a copy of `items` in ascending order.
pub(crate) fn sort_ascending<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    select_largest(items.len(), items)
}

fn select_largest<T: Ord + Clone>(count: usize, items: &[T]) -> Vec<T> {
    if count == 0 || items.is_empty() {
        return Vec::new();
    }

    let capacity = count.min(items.len());
    let mut heap = MinHeap::with_capacity(capacity.saturating_add(1));
    for item in items {
        if heap.len() < capacity {
            heap.insert(item.clone());
        } else if heap.peek_min().is_ok_and(|min| item >= min) {
            heap.insert(item.clone());
            // The heap is at capacity here, so eviction always succeeds.
            let _evicted = heap.remove_min();
        }
    }

    let mut selected = Vec::with_capacity(heap.len());
    while let Ok(item) = heap.remove_min() {
        selected.push(item);
    }
    selected
}

#[cfg(test)]
mod tests;
