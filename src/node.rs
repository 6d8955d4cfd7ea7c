//! Per-edge statistics
//!
//! An [`Edge`] records what the engine has learned about taking one action
//! from one equivalence class of states.

use std::fmt;

/// Stable handle to an edge stored in the [`TranspositionTable`](crate::table::TranspositionTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the arena index of this edge
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Statistics for one (equivalence class, action) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<A> {
    /// The action this edge stands for
    pub action: A,

    /// Exponentially decayed estimate of the episode outcome
    reward: f64,

    /// Number of backups applied to this edge
    visits: u64,
}

impl<A> Edge<A> {
    /// Creates an unvisited edge
    pub fn new(action: A) -> Self {
        Edge {
            action,
            reward: 0.0,
            visits: 0,
        }
    }

    /// Returns the decayed reward estimate
    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Returns the number of times this edge has been backed up
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Calculates the UCB1 score of this edge
    ///
    /// ```text
    /// score = reward + exploration_constant * sqrt(ln(parent_visits) / visits)
    /// ```
    ///
    /// `parent_visits` is the visit total of the siblings that are feasible
    /// right now. An unvisited edge scores positive infinity.
    pub fn score(&self, parent_visits: u64, exploration_constant: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let exploration =
            exploration_constant * ((parent_visits as f64).ln() / self.visits as f64).sqrt();

        self.reward + exploration
    }

    /// Blends an observed outcome into the estimate at a fixed rate
    ///
    /// This is an exponential moving average, not a running mean: every
    /// observation weighs `decay_rate` no matter how many came before it.
    pub fn update(&mut self, observed_reward: f64, decay_rate: f64) {
        self.reward = (1.0 - decay_rate) * self.reward + decay_rate * observed_reward;
        self.visits += 1;
    }
}
