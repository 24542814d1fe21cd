use rustc_hash::FxHashMap;

use crate::error::{AprioriError, Result};

/// Flat storage for equal-sized itemsets and their support counts
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// One level Lk of frequent itemsets, all of size `itemset_size`, kept in
/// lexicographic order so that itemsets sharing a prefix are contiguous.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    itemset_size: usize,
    lookup: FxHashMap<Vec<usize>, usize>,
}

/// Collects (itemset, support) pairs and produces a [`FrequentLevel`].
///
/// This is the only way to construct a level, so every level is checked to
/// hold ascending, distinct, equal-sized itemsets in lexicographic order.
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    itemset_size: usize,
    entries: Vec<(Vec<usize>, usize)>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    pub(crate) fn add_itemset_with_support(&mut self, items: &[usize], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn itemset_size(&self) -> usize {
        self.itemset_size
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets with their absolute support, in level order
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.storage.len())
            .map(move |idx| (self.get_itemset(idx), self.storage.get_support(idx)))
    }

    /// Absolute support of `itemset`, or `None` if it is not in this level
    pub fn support(&self, itemset: &[usize]) -> Option<usize> {
        self.lookup
            .get(itemset)
            .map(|&idx| self.storage.get_support(idx))
    }

    pub fn contains(&self, itemset: &[usize]) -> bool {
        self.lookup.contains_key(itemset)
    }
}

impl LevelBuilder {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stage an itemset. It must have the level's size and be strictly ascending.
    pub fn push(&mut self, items: Vec<usize>, support: usize) -> Result<()> {
        if items.len() != self.itemset_size {
            return Err(AprioriError::internal(format!(
                "itemset {:?} does not belong in level of size {}",
                items, self.itemset_size
            )));
        }
        if items.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(AprioriError::internal(format!(
                "itemset {:?} is not strictly ascending",
                items
            )));
        }
        self.entries.push((items, support));
        Ok(())
    }

    pub fn build(mut self) -> Result<FrequentLevel> {
        self.entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        if let Some(pair) = self.entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(AprioriError::internal(format!(
                "itemset {:?} staged twice in level of size {}",
                pair[0].0, self.itemset_size
            )));
        }

        let mut storage = ItemsetStorage::with_capacity(
            self.entries.len() * self.itemset_size,
            self.entries.len(),
        );
        let mut lookup =
            FxHashMap::with_capacity_and_hasher(self.entries.len(), Default::default());
        for (items, support) in self.entries {
            let idx = storage.add_itemset_with_support(&items, support);
            lookup.insert(items, idx);
        }

        Ok(FrequentLevel {
            storage,
            itemset_size: self.itemset_size,
            lookup,
        })
    }
}
