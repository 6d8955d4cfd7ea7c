//! Configuration options for the engine
//!
//! This module defines the defaults used by the convenience operations of
//! [`UctEngine`](crate::UctEngine). The explicit operations take their
//! exploration constant and decay rate as arguments and ignore these.

use crate::{Result, UctError};

/// Criteria for picking the best action of a class once learning is done
///
/// Used by [`UctEngine::best_action`](crate::UctEngine::best_action), which
/// never explores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestActionCriteria {
    /// Select the feasible edge with the highest reward estimate
    ///
    /// Unvisited edges are skipped unless nothing else is feasible.
    HighestReward,

    /// Select the feasible edge that was backed up most often
    ///
    /// This is more conservative, since UCB1 keeps returning to edges whose
    /// estimate holds up.
    MostVisits,
}

/// Configuration for the engine
///
/// # Example
///
/// ```
/// use tabular_uct::{UctConfig, config::BestActionCriteria};
///
/// let config = UctConfig::default()
///     .with_exploration_constant(1.5)
///     .with_decay_rate(0.01)
///     .with_initial_capacity(1 << 16)
///     .with_best_action_criteria(BestActionCriteria::MostVisits);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct UctConfig {
    /// Exploration constant for UCB1
    ///
    /// Higher values favor edges with few visits over edges with a high
    /// reward estimate.
    pub exploration_constant: f64,

    /// Rate at which a new outcome is blended into an edge's reward estimate
    ///
    /// Must lie in `(0, 1]`. Small values average over many episodes, large
    /// values track recent outcomes.
    pub decay_rate: f64,

    /// Number of edges to reserve room for up front
    pub initial_capacity: usize,

    /// Criteria used by `best_action`
    pub best_action_criteria: BestActionCriteria,
}

impl Default for UctConfig {
    fn default() -> Self {
        UctConfig {
            exploration_constant: 1.0,
            decay_rate: 0.00001,
            initial_capacity: 0,
            best_action_criteria: BestActionCriteria::HighestReward,
        }
    }
}

impl UctConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the decay rate
    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    /// Sets the number of edges to reserve room for
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the criteria for `best_action`
    pub fn with_best_action_criteria(mut self, criteria: BestActionCriteria) -> Self {
        self.best_action_criteria = criteria;
        self
    }

    /// Checks that every value is in range
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(UctError::InvalidConfiguration(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }

        if !(self.decay_rate > 0.0 && self.decay_rate <= 1.0) {
            return Err(UctError::InvalidConfiguration(format!(
                "decay rate must lie in (0, 1], got {}",
                self.decay_rate
            )));
        }

        Ok(())
    }
}
