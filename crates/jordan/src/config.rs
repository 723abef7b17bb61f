//! Solver configuration.

use jordan_linalg::{ClassificationPolicy, EliminationOptions};
use jordan_rings::NumericMode;

/// Smallest accepted number of unknowns.
pub const MIN_DIMENSION: usize = 2;

/// Configuration for a solve request.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Scalar representation used for every entry.
    pub mode: NumericMode,
    /// Largest accepted number of unknowns; never below [`MIN_DIMENSION`].
    pub max_dimension: usize,
    /// Record the parsed input as the first step.
    pub record_initial: bool,
    /// Final classification rule.
    pub policy: ClassificationPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: NumericMode::Rational,
            max_dimension: 8,
            record_initial: true,
            policy: ClassificationPolicy::Literal,
        }
    }
}

impl SolverConfig {
    /// Sets the numeric mode.
    #[must_use]
    pub fn with_mode(mut self, mode: NumericMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the largest accepted number of unknowns.
    ///
    /// Values below [`MIN_DIMENSION`] are raised to it.
    #[must_use]
    pub fn with_max_dimension(mut self, max: usize) -> Self {
        self.max_dimension = max.max(MIN_DIMENSION);
        self
    }

    /// Sets the classification policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ClassificationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Toggles recording of the initial snapshot.
    #[must_use]
    pub fn with_initial_step(mut self, record: bool) -> Self {
        self.record_initial = record;
        self
    }

    pub(crate) fn elimination_options(&self) -> EliminationOptions {
        EliminationOptions {
            record_initial: self.record_initial,
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = SolverConfig::default()
            .with_mode(NumericMode::Float)
            .with_max_dimension(3)
            .with_policy(ClassificationPolicy::RankAware)
            .with_initial_step(false);

        assert_eq!(config.mode, NumericMode::Float);
        assert_eq!(config.max_dimension, 3);

        let options = config.elimination_options();
        assert!(!options.record_initial);
        assert_eq!(options.policy, ClassificationPolicy::RankAware);
    }

    #[test]
    fn test_max_dimension_never_below_minimum() {
        assert_eq!(SolverConfig::default().with_max_dimension(1).max_dimension, MIN_DIMENSION);
        assert_eq!(SolverConfig::default().with_max_dimension(0).max_dimension, MIN_DIMENSION);
    }
}
