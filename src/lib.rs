//! # tabular-uct
//!
//! An online UCT (Upper Confidence bounds applied to Trees) statistics engine
//! with a transposition table.
//!
//! The engine learns, episode by episode, which action to take from each class
//! of equivalent states. It keeps one statistics record per
//! (equivalence class, action) pair, chooses actions with the UCB1 rule, and at
//! the end of every episode blends the episode's outcome into every choice made
//! along the way.
//!
//! ## Features
//!
//! - Generic over any decision process implementing [`DecisionState`]
//! - Statistics shared between all states with the same key
//! - Feasibility re-evaluated on every decision, so action availability may
//!   vary between equivalent states
//! - Exponentially decayed reward estimates for non-stationary outcomes
//! - Table and episode statistics with a memory estimate
//!
//! ## Basic Usage
//!
//! ```
//! use tabular_uct::{DecisionState, UctConfig, UctEngine};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Move { Left, Right }
//!
//! // A one-decision process: the episode ends after the first move
//! struct Fork;
//!
//! impl DecisionState for Fork {
//!     type Action = Move;
//!     type Key = ();
//!
//!     fn key(&self) -> Self::Key {}
//!
//!     fn actions(&self) -> Vec<Move> {
//!         vec![Move::Left, Move::Right]
//!     }
//!
//!     fn is_feasible(&self, _action: &Move) -> bool {
//!         true
//!     }
//! }
//!
//! fn main() -> Result<(), tabular_uct::UctError> {
//!     let config = UctConfig::default()
//!         .with_exploration_constant(1.0)
//!         .with_decay_rate(0.1);
//!     let mut engine = UctEngine::new(config)?;
//!
//!     for _ in 0..100 {
//!         let reward = match engine.choose(&Fork) {
//!             Some(Move::Right) => 1.0,
//!             _ => 0.0,
//!         };
//!         engine.finish(reward);
//!     }
//!
//!     assert_eq!(engine.best_action(&Fork)?, Move::Right);
//!     println!("{}", engine.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. **Lookup**: the state's key selects its equivalence class. On the first
//!    visit one edge per action is created and the first feasible action is
//!    returned as is.
//!
//! 2. **Selection**: on later visits every feasible edge is scored with UCB1,
//!    `reward + c * sqrt(ln(N) / n)`, where `N` sums the visits of the
//!    feasible edges and unvisited edges score infinity.
//!
//! 3. **Backup**: when the caller finishes an episode, every chosen edge
//!    receives `reward = (1 - d) * reward + d * outcome` and one more visit.
//!
//! ## Limitations
//!
//! The table never evicts anything: memory grows with the number of distinct
//! classes visited times their branching factor. One engine serves one
//! sequential stream of episodes.

pub mod config;
pub mod engine;
pub mod environment;
pub mod node;
pub mod policy;
pub mod stats;
pub mod table;
pub mod trajectory;

pub use config::UctConfig;
pub use engine::UctEngine;
pub use environment::DecisionState;
pub use node::{Edge, EdgeId};
pub use policy::{SelectionPolicy, UCB1Policy};
pub use stats::TableStatistics;
pub use table::{FeasibleSet, Lookup, TranspositionTable};
pub use trajectory::Trajectory;

/// Error types for the engine
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UctError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The state's equivalence class has never been visited
    #[error("State has not been visited")]
    UnvisitedState,

    /// None of the class's actions are feasible from the given state
    #[error("No feasible actions available from current state")]
    NoFeasibleActions,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, UctError>;
