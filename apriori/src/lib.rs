//! Apriori frequent itemset mining and association rules.
//!
//! ```
//! use apriori::{mine_rules, AprioriConfig};
//!
//! let transactions = vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]];
//! let rules = mine_rules(transactions, AprioriConfig::new(0.5, 0.5)).unwrap();
//! assert_eq!(rules.len(), 4);
//! ```

pub mod apriori;
pub mod config;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use apriori::{
    mine_rules, Apriori, FrequentLevel, ItemsetMiner, LevelBuilder, Rule, RuleGenerator,
    TransactionIndex,
};
pub use config::{AprioriConfig, PruneStrategy};
pub use error::{AprioriError, Result};
