use crate::error::{AprioriError, Result};

/// Which single-element deletions of a candidate are checked against the
/// previous level before its support is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneStrategy {
    /// Every size-k subset of a size-(k+1) candidate must be frequent.
    #[default]
    Full,
    /// Only the deletions at positions `0..k-1` are checked. The two
    /// remaining deletions are the join parents, so this admits the same
    /// candidates as `Full` while doing two fewer lookups per candidate.
    Legacy,
}

/// Thresholds and limits for one mining run.
#[derive(Debug, Clone, PartialEq)]
pub struct AprioriConfig {
    /// Minimum support as a fraction of the transaction count, in `[0, 1]`
    pub min_support: f64,
    /// Minimum rule confidence, in `[0, 1]`
    pub min_confidence: f64,
    /// Largest itemset size to mine
    pub max_len: usize,
    pub prune: PruneStrategy,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.8,
            max_len: 10,
            prune: PruneStrategy::Full,
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    /// Reject thresholds we cannot mine with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(AprioriError::invalid_config(format!(
                "min_support must be between 0 and 1, got {}",
                self.min_support
            )));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AprioriError::invalid_config(format!(
                "min_confidence must be between 0 and 1, got {}",
                self.min_confidence
            )));
        }
        if self.max_len == 0 {
            return Err(AprioriError::invalid_config("max_len must be at least 1"));
        }
        Ok(())
    }

    /// Absolute support count an itemset needs to be frequent.
    ///
    /// `count >= ceil(min_support * T)` holds exactly when
    /// `count >= min_support * T` for integer counts. The floor of 1 keeps
    /// itemsets that never occur out of every level.
    ///
    /// The product is taken in floating point, so a fraction that is not
    /// exactly representable can land just above an integer and round up:
    /// `0.7 * 10` is `7.000000000000001`, giving 8 rather than 7.
    pub fn min_count(&self, num_transactions: usize) -> usize {
        let threshold = (self.min_support * num_transactions as f64).ceil() as usize;
        threshold.max(1)
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_prune(mut self, prune: PruneStrategy) -> Self {
        self.prune = prune;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AprioriConfig::default();
        assert_eq!(config.min_support, 0.1);
        assert_eq!(config.min_confidence, 0.8);
        assert_eq!(config.max_len, 10);
        assert_eq!(config.prune, PruneStrategy::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        assert!(AprioriConfig::new(0.0, 0.0).validate().is_ok());
        assert!(AprioriConfig::new(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(AprioriConfig::new(-0.1, 0.5).validate().is_err());
        assert!(AprioriConfig::new(1.1, 0.5).validate().is_err());
        assert!(AprioriConfig::new(0.5, -0.01).validate().is_err());
        assert!(AprioriConfig::new(0.5, 2.0).validate().is_err());
        assert!(AprioriConfig::new(f64::NAN, 0.5).validate().is_err());
        assert!(AprioriConfig::new(0.5, f64::NAN).validate().is_err());
        assert!(AprioriConfig::default().with_max_len(0).validate().is_err());
    }

    #[test]
    fn test_validate_error_is_not_internal() {
        let err = AprioriConfig::new(1.5, 0.5).validate().unwrap_err();
        assert!(!err.is_internal());
    }

    #[test]
    fn test_min_count() {
        let config = AprioriConfig::new(0.5, 0.5);
        assert_eq!(config.min_count(4), 2);
        assert_eq!(config.min_count(5), 3);
        assert_eq!(AprioriConfig::new(0.25, 0.5).min_count(10), 3);

        assert_eq!(AprioriConfig::new(0.0, 0.5).min_count(10), 1);
        assert_eq!(AprioriConfig::new(1.0, 0.5).min_count(10), 10);
        assert_eq!(AprioriConfig::new(0.5, 0.5).min_count(0), 1);
    }

    #[test]
    fn test_min_count_rounds_up_float_products() {
        assert_eq!(AprioriConfig::new(0.7, 0.5).min_count(10), 8);
        assert_eq!(AprioriConfig::new(0.1, 0.5).min_count(30), 3);
    }
}
