use std::fmt;

use tracing::debug;

use super::combinations::combinations;
use super::index::TransactionIndex;
use super::utils::FrequentLevel;
use crate::error::{AprioriError, Result};

/// An association rule `condition -> result`.
///
/// Labels in `condition` and `result` appear in item id order, i.e. the
/// order in which they were first seen in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    condition: Vec<String>,
    result: Vec<String>,
    confidence: f64,
    support: f64,
}

impl Rule {
    pub(crate) fn new(
        condition: Vec<String>,
        result: Vec<String>,
        confidence: f64,
        support: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(AprioriError::internal(format!(
                "confidence {} out of range for {:?} -> {:?}",
                confidence, condition, result
            )));
        }
        if !(0.0..=1.0).contains(&support) {
            return Err(AprioriError::internal(format!(
                "support {} out of range for {:?} -> {:?}",
                support, condition, result
            )));
        }
        if result.is_empty() || condition.iter().any(|label| result.contains(label)) {
            return Err(AprioriError::internal(format!(
                "rule {:?} -> {:?} must have a non-empty result disjoint from its condition",
                condition, result
            )));
        }
        Ok(Self {
            condition,
            result,
            confidence,
            support,
        })
    }

    pub fn condition(&self) -> &[String] {
        &self.condition
    }

    pub fn result(&self) -> &[String] {
        &self.result
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Fraction of all transactions containing condition and result together
    pub fn support(&self) -> f64 {
        self.support
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} -> {{{}}} (confidence: {:.3}, support: {:.3})",
            self.condition.join(", "),
            self.result.join(", "),
            self.confidence,
            self.support
        )
    }
}

/// Derives association rules from a complete sequence of frequent levels.
#[derive(Debug)]
pub struct RuleGenerator<'a> {
    levels: &'a [FrequentLevel],
    index: &'a TransactionIndex,
    min_confidence: f64,
}

impl<'a> RuleGenerator<'a> {
    /// `levels[k - 1]` must hold the frequent k-itemsets.
    pub fn new(
        levels: &'a [FrequentLevel],
        index: &'a TransactionIndex,
        min_confidence: f64,
    ) -> Self {
        Self {
            levels,
            index,
            min_confidence,
        }
    }

    /// Every rule whose confidence reaches the threshold, ordered by itemset
    /// size, then condition size, then level order, then subset order.
    pub fn generate(&self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        for (i, level) in self.levels.iter().enumerate().skip(1) {
            let size = i + 1;
            if level.itemset_size() != size {
                return Err(AprioriError::internal(format!(
                    "level {} holds itemsets of size {}",
                    size,
                    level.itemset_size()
                )));
            }
            for condition_size in 1..size {
                self.rules_for(level, condition_size, &mut rules)?;
            }
        }

        debug!(rules = rules.len(), "generated rules");
        Ok(rules)
    }

    fn rules_for(
        &self,
        level: &FrequentLevel,
        condition_size: usize,
        out: &mut Vec<Rule>,
    ) -> Result<()> {
        let reference = &self.levels[condition_size - 1];
        let num_transactions = self.index.num_transactions() as f64;

        for (itemset, support) in level.iter() {
            for subset in combinations(itemset, condition_size) {
                let condition_support = reference.support(&subset).ok_or_else(|| {
                    AprioriError::internal(format!(
                        "subset {:?} of frequent itemset {:?} missing from level {}",
                        subset, itemset, condition_size
                    ))
                })?;
                if condition_support == 0 || support > condition_support {
                    return Err(AprioriError::internal(format!(
                        "support {} of {:?} exceeds support {} of its subset {:?}",
                        support, itemset, condition_support, subset
                    )));
                }

                let confidence = support as f64 / condition_support as f64;
                if confidence < self.min_confidence {
                    continue;
                }

                // both sides ascending, so the remainder keeps id order
                let remainder: Vec<usize> = itemset
                    .iter()
                    .copied()
                    .filter(|item| subset.binary_search(item).is_err())
                    .collect();

                out.push(Rule::new(
                    self.decode(&subset)?,
                    self.decode(&remainder)?,
                    confidence,
                    support as f64 / num_transactions,
                )?);
            }
        }
        Ok(())
    }

    fn decode(&self, ids: &[usize]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.index
                    .decode(id)
                    .map(str::to_owned)
                    .ok_or_else(|| AprioriError::internal(format!("item id {} has no label", id)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string()],
            2.0 / 3.0,
            0.5,
        )
        .unwrap();
        assert_eq!(rule.to_string(), "{a} -> {b, c} (confidence: 0.667, support: 0.500)");
    }

    #[test]
    fn test_rule_rejects_out_of_range() {
        let err = Rule::new(vec!["a".into()], vec!["b".into()], 1.5, 0.5).unwrap_err();
        assert!(err.is_internal());

        let err = Rule::new(vec!["a".into()], vec!["b".into()], 0.5, -0.1).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_rule_rejects_overlap_and_empty_result() {
        assert!(Rule::new(vec!["a".into()], vec!["a".into()], 1.0, 1.0).is_err());
        assert!(Rule::new(vec!["a".into()], vec![], 1.0, 1.0).is_err());
    }
}
