pub mod combinations;
pub mod index;
pub mod miner;
pub mod rules;
pub mod utils;


pub use index::TransactionIndex;
pub use miner::ItemsetMiner;
pub use rules::{Rule, RuleGenerator};
pub use utils::{FrequentLevel, ItemsetStorage, LevelBuilder};

use tracing::info;

use crate::config::AprioriConfig;
use crate::error::Result;

/// Full pipeline: transaction index, frequent levels, association rules.
#[derive(Debug, Clone)]
pub struct Apriori {
    index: TransactionIndex,
    config: AprioriConfig,
    levels: Vec<FrequentLevel>,
}

impl Apriori {
    /// Validates `config` before touching the transactions.
    pub fn new<I, T, S>(transactions: I, config: AprioriConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        Ok(Self {
            index: TransactionIndex::new(transactions),
            config,
            levels: Vec::new(),
        })
    }

    pub fn solve(&mut self) -> Result<Vec<Rule>> {
        let min_count = self.config.min_count(self.index.num_transactions());
        let seed = self.index.seed_level(min_count)?;

        let mut miner = ItemsetMiner::new(&self.index, seed, self.config.max_len, min_count)
            .with_prune(self.config.prune);
        miner.mine()?;
        let levels = miner.into_levels();

        let rules =
            RuleGenerator::new(&levels, &self.index, self.config.min_confidence).generate()?;

        info!(
            transactions = self.index.num_transactions(),
            items = self.index.num_items(),
            min_count,
            levels = levels.len(),
            rules = rules.len(),
            "apriori run complete"
        );
        self.levels = levels;
        Ok(rules)
    }

    /// Frequent levels from the last `solve`; empty before the first run
    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn index(&self) -> &TransactionIndex {
        &self.index
    }

    pub fn config(&self) -> &AprioriConfig {
        &self.config
    }

    pub fn num_transactions(&self) -> usize {
        self.index.num_transactions()
    }
}

/// Mine association rules from `transactions` in one call.
pub fn mine_rules<I, T, S>(transactions: I, config: AprioriConfig) -> Result<Vec<Rule>>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Apriori::new(transactions, config)?.solve()
}
