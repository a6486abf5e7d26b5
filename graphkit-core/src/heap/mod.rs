//! Array-backed binary min-heap.
//!
//! Serves both as a general priority queue and as the engine behind
//! [`crate::top_k`] and the shortest-path frontier. Equal elements come out
//! in an unspecified order.

use crate::error::HeapError;

/// A binary min-heap over a total order.
///
/// # Examples
/// ```
/// use graphkit_core::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.remove_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Adds `item` to the heap.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns the smallest element without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child] >= self.items[parent] {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[parent] <= self.items[smallest] {
                break;
            }
            self.items.swap(parent, smallest);
            parent = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
