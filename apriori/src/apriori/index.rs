use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::utils::{FrequentLevel, LevelBuilder};
use crate::error::Result;

/// Dense item ids plus an inverted index from item id to the transactions
/// containing it.
///
/// Ids are assigned in first-occurrence order. Transaction id lists are
/// ascending and free of duplicates.
#[derive(Debug, Clone, Default)]
pub struct TransactionIndex {
    label_to_id: FxHashMap<Arc<str>, usize>,
    decoder: Vec<Arc<str>>,
    tids: Vec<Vec<usize>>,
    num_transactions: usize,
}

impl TransactionIndex {
    pub fn new<I, T, S>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for (tid, transaction) in transactions.into_iter().enumerate() {
            for label in transaction {
                let id = index.intern(label.as_ref());
                let tids = &mut index.tids[id];
                // tids arrive in order, so only a repeat within this transaction can collide
                if tids.last() != Some(&tid) {
                    tids.push(tid);
                }
            }
            index.num_transactions = tid + 1;
        }

        debug!(
            transactions = index.num_transactions,
            items = index.decoder.len(),
            "built transaction index"
        );
        index
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.decoder.len();
        let arc: Arc<str> = label.into();
        self.label_to_id.insert(arc.clone(), id);
        self.decoder.push(arc);
        self.tids.push(Vec::new());
        id
    }

    /// Distinct labels, indexed by item id
    pub fn decoder(&self) -> impl Iterator<Item = &str> {
        self.decoder.iter().map(|label| label.as_ref())
    }

    pub fn decode(&self, id: usize) -> Option<&str> {
        self.decoder.get(id).map(|label| label.as_ref())
    }

    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Ascending transaction indices containing item `id`
    pub fn tids(&self, id: usize) -> &[usize] {
        self.tids.get(id).map_or(&[], |tids| tids.as_slice())
    }

    pub fn num_items(&self) -> usize {
        self.decoder.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn is_empty(&self) -> bool {
        self.num_transactions == 0
    }

    /// Level L1: every single item occurring in at least `min_count` transactions.
    pub fn seed_level(&self, min_count: usize) -> Result<FrequentLevel> {
        let mut builder = LevelBuilder::new(1);
        for (id, tids) in self.tids.iter().enumerate() {
            if tids.len() >= min_count {
                builder.push(vec![id], tids.len())?;
            }
        }
        builder.build()
    }
}

/// Intersection of two ascending id lists
pub(crate) fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
