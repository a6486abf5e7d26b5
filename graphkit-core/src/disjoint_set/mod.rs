//! Union-find (disjoint set union) over arbitrary hashable items.
//!
//! Items are mapped by value to slot indices in a growable table. A slot is
//! either a root, which carries the component rank, or a child pointing at
//! its parent slot. `find_set` compresses paths iteratively and `union`
//! merges by rank, consulting an injected random source only when both roots
//! have the same rank.

use std::{collections::HashMap, hash::Hash};

use rand::{RngCore, SeedableRng, rngs::SmallRng};

use crate::error::DisjointSetError;

const INITIAL_SLOTS: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Root { rank: u32 },
    Child { parent: usize },
}

/// A partition of registered items into disjoint components.
///
/// # Examples
/// ```
/// use graphkit_core::DisjointSet;
///
/// let mut set = DisjointSet::with_seed(7);
/// for item in 1..=5 {
///     set.make_set(item)?;
/// }
/// set.union(&1, &2)?;
/// set.union(&3, &4)?;
/// assert_eq!(set.find_set(&1)?, set.find_set(&2)?);
/// assert_ne!(set.find_set(&1)?, set.find_set(&3)?);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), graphkit_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T, R = SmallRng> {
    slots: Vec<Slot>,
    index: HashMap<T, usize>,
    components: usize,
    rng: R,
}

impl<T: Eq + Hash> DisjointSet<T, SmallRng> {
    /// Creates an empty set whose rank tie-breaks are seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates an empty set with reproducible rank tie-breaks.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<T: Eq + Hash> Default for DisjointSet<T, SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, R: RngCore> DisjointSet<T, R> {
    /// Creates an empty set that draws rank tie-breaks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            slots: Vec::with_capacity(INITIAL_SLOTS),
            index: HashMap::new(),
            components: 0,
            rng,
        }
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no item has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of distinct components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns `true` when `item` has been registered.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Registers `item` as a new singleton component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateElement`] when an equal item is
    /// already registered.
    pub fn make_set(&mut self, item: T) -> Result<usize, DisjointSetError> {
        if self.index.contains_key(&item) {
            return Err(DisjointSetError::DuplicateElement);
        }
        let slot = self.slots.len();
        if slot == self.slots.capacity() {
            self.slots.reserve_exact(slot.max(INITIAL_SLOTS));
        }
        self.slots.push(Slot::Root { rank: 0 });
        self.index.insert(item, slot);
        self.components += 1;
        Ok(slot)
    }

    /// Returns the representative slot of the component containing `item`.
    ///
    /// Every slot visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `item` was never
    /// registered.
    pub fn find_set(&mut self, item: &T) -> Result<usize, DisjointSetError> {
        let slot = *self
            .index
            .get(item)
            .ok_or(DisjointSetError::UnknownElement)?;
        Ok(self.find_root(slot))
    }

    /// Returns `true` when both items belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either item was never
    /// registered.
    pub fn same_set(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        Ok(self.find_set(left)? == self.find_set(right)?)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The root with the larger rank becomes the parent. When ranks are equal
    /// the random source picks the surviving root and only that root's rank
    /// grows. Returns the representative of the merged component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either item was never
    /// registered, or [`DisjointSetError::SameComponent`] when both already
    /// share a representative.
    pub fn union(&mut self, left: &T, right: &T) -> Result<usize, DisjointSetError> {
        let left_root = self.find_set(left)?;
        let right_root = self.find_set(right)?;
        if left_root == right_root {
            return Err(DisjointSetError::SameComponent {
                representative: left_root,
            });
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = if left_rank > right_rank {
            (left_root, right_root)
        } else if right_rank > left_rank {
            (right_root, left_root)
        } else if self.rng.next_u32() & 1 == 0 {
            self.slots[left_root] = Slot::Root {
                rank: left_rank.saturating_add(1),
            };
            (left_root, right_root)
        } else {
            self.slots[right_root] = Slot::Root {
                rank: right_rank.saturating_add(1),
            };
            (right_root, left_root)
        };

        self.slots[child] = Slot::Child { parent };
        self.components -= 1;
        Ok(parent)
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        let mut node = slot;
        while let Slot::Child { parent } = self.slots[node] {
            self.slots[node] = Slot::Child { parent: root };
            node = parent;
        }

        root
    }

    fn rank_of(&self, root: usize) -> u32 {
        match self.slots[root] {
            Slot::Root { rank } => rank,
            Slot::Child { .. } => 0,
        }
    }
}
