use std::cmp::Reverse;

use tracing::{debug, trace};

use super::combinations::for_each_combination;
use super::index::{intersect_sorted, TransactionIndex};
use super::utils::{FrequentLevel, LevelBuilder};
use crate::config::PruneStrategy;
use crate::error::{AprioriError, Result};

/// Level-wise frequent itemset discovery over a [`TransactionIndex`].
///
/// Starts from a seed level L1 and grows L2, L3, ... until `max_len` is
/// reached or a level comes out empty.
#[derive(Debug)]
pub struct ItemsetMiner<'a> {
    index: &'a TransactionIndex,
    levels: Vec<FrequentLevel>,
    max_len: usize,
    min_count: usize,
    prune: PruneStrategy,
}

impl<'a> ItemsetMiner<'a> {
    pub fn new(
        index: &'a TransactionIndex,
        seed: FrequentLevel,
        max_len: usize,
        min_count: usize,
    ) -> Self {
        Self {
            index,
            levels: vec![seed],
            max_len,
            min_count,
            prune: PruneStrategy::default(),
        }
    }

    pub fn with_prune(mut self, prune: PruneStrategy) -> Self {
        self.prune = prune;
        self
    }

    pub fn mine(&mut self) -> Result<()> {
        if self.levels.len() != 1 || self.levels[0].itemset_size() != 1 {
            return Err(AprioriError::internal(
                "mining must start from a single seed level of 1-itemsets",
            ));
        }

        while self.levels.len() < self.max_len {
            let current = &self.levels[self.levels.len() - 1];
            let candidates = Self::join(current);
            let num_candidates = candidates.len();

            let mut builder = LevelBuilder::new(current.itemset_size() + 1);
            for candidate in candidates {
                if !self.survives_prune(current, &candidate) {
                    continue;
                }
                let support = self.count(&candidate);
                if support >= self.min_count {
                    builder.push(candidate, support)?;
                }
            }
            let next = builder.build()?;

            debug!(
                size = next.itemset_size(),
                candidates = num_candidates,
                frequent = next.len(),
                "mined level"
            );
            if next.is_empty() {
                break;
            }
            self.levels.push(next);
        }
        Ok(())
    }

    /// Size-(k+1) candidates from a level of k-itemsets.
    ///
    /// Itemsets sharing their first k-1 items sit next to each other in the
    /// level, and each pair of their last items extends the shared prefix.
    pub(crate) fn join(level: &FrequentLevel) -> Vec<Vec<usize>> {
        let itemsets: Vec<&[usize]> = level.iter_itemsets().collect();
        let prefix_len = level.itemset_size().saturating_sub(1);
        let mut candidates = Vec::new();

        let mut start = 0;
        while start < itemsets.len() {
            let prefix = &itemsets[start][..prefix_len];
            let mut end = start + 1;
            while end < itemsets.len() && &itemsets[end][..prefix_len] == prefix {
                end += 1;
            }

            let tails: Vec<usize> = itemsets[start..end]
                .iter()
                .map(|itemset| itemset[prefix_len])
                .collect();
            for_each_combination(&tails, 2, &mut |pair: &[usize]| {
                let mut candidate = Vec::with_capacity(prefix_len + 2);
                candidate.extend_from_slice(prefix);
                candidate.extend_from_slice(pair);
                candidates.push(candidate);
            });

            start = end;
        }
        candidates
    }

    /// Anti-monotone check of a candidate against the level it was joined from.
    pub(crate) fn survives_prune(&self, previous: &FrequentLevel, candidate: &[usize]) -> bool {
        let checked = match self.prune {
            PruneStrategy::Full => candidate.len(),
            PruneStrategy::Legacy => candidate.len().saturating_sub(2),
        };

        let mut subset = Vec::with_capacity(candidate.len().saturating_sub(1));
        (0..checked).all(|skip| {
            subset.clear();
            subset.extend(
                candidate
                    .iter()
                    .enumerate()
                    .filter(|&(pos, _)| pos != skip)
                    .map(|(_, &item)| item),
            );
            previous.contains(&subset)
        })
    }

    /// Number of transactions containing every item of `itemset`, or 0 once
    /// the count is known to fall below the minimum support.
    pub(crate) fn count(&self, itemset: &[usize]) -> usize {
        let mut ordered: Vec<&[usize]> =
            itemset.iter().map(|&item| self.index.tids(item)).collect();
        // largest first, then consume from the back so the smallest lists go first
        ordered.sort_by_key(|tids| Reverse(tids.len()));

        let mut running: Option<Vec<usize>> = None;
        while let Some(tids) = ordered.pop() {
            let next = match running {
                None => tids.to_vec(),
                Some(acc) => intersect_sorted(&acc, tids),
            };
            if next.len() < self.min_count {
                trace!(?itemset, "support fell below threshold");
                return 0;
            }
            running = Some(next);
        }
        running.map_or(0, |tids| tids.len())
    }

    /// Levels L1..Lmax mined so far
    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn into_levels(self) -> Vec<FrequentLevel> {
        self.levels
    }
}
