//! The online UCT engine
//!
//! This module composes the transposition table, the selection policy and the
//! trajectory into the two operations a driving loop needs: choosing an
//! action for a state and finishing an episode with its outcome.

use log::{debug, trace};

use crate::{
    config::{BestActionCriteria, UctConfig},
    environment::DecisionState,
    node::Edge,
    policy::selection::{SelectionPolicy, UCB1Policy},
    stats::TableStatistics,
    table::{Lookup, TranspositionTable},
    trajectory::Trajectory,
    Result, UctError,
};

/// Online UCT statistics engine
///
/// The engine keeps one [`Edge`] per (equivalence class, action) pair ever
/// visited and never forgets any of them, so memory grows with the number of
/// distinct classes seen.
///
/// An episode is a sequence of [`choose_action`](Self::choose_action) calls
/// followed by one [`finish_episode`](Self::finish_episode); where an episode
/// ends is entirely up to the caller.
pub struct UctEngine<S: DecisionState> {
    /// Statistics for every class visited so far
    table: TranspositionTable<S::Key, S::Action>,

    /// Edges chosen since the last backup
    trajectory: Trajectory,

    /// Policy for repeat visits
    selection_policy: Box<dyn SelectionPolicy<S::Action>>,

    /// Defaults for the convenience operations
    config: UctConfig,

    episodes: u64,
    backed_up: u64,
}

impl<S: DecisionState> UctEngine<S> {
    /// Creates an engine with the given configuration
    ///
    /// Fails if the configuration is out of range.
    pub fn new(config: UctConfig) -> Result<Self> {
        config.validate()?;

        Ok(UctEngine {
            table: TranspositionTable::with_capacity(config.initial_capacity),
            trajectory: Trajectory::new(),
            selection_policy: Box::new(UCB1Policy::new()),
            config,
            episodes: 0,
            backed_up: 0,
        })
    }

    /// Sets the selection policy used on repeat visits
    pub fn with_selection_policy<P: SelectionPolicy<S::Action> + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Chooses an action for `state` and records it in the current episode
    ///
    /// On the first visit to the state's class, edges are created for every
    /// action and the first feasible one is returned without comparing
    /// scores. On later visits the selection policy picks among the edges
    /// feasible for `state` right now.
    ///
    /// Returns `None` when no action is feasible; the trajectory is then left
    /// untouched.
    pub fn choose_action(&mut self, state: &S, exploration_constant: f64) -> Option<S::Action> {
        let choice = match self.table.lookup_or_create(state) {
            Lookup::Created { default, count } => {
                trace!("first visit, {} actions, default {:?}", count, default);
                default
            }
            Lookup::Existing(feasible) => {
                let choice = self.selection_policy.select_edge(
                    self.table.edges(),
                    &feasible,
                    exploration_constant,
                );
                trace!(
                    "repeat visit, {} feasible, parent visits {}, chose {:?}",
                    feasible.len(),
                    feasible.parent_visits(),
                    choice
                );
                choice
            }
        }?;

        let action = self.table.edge(choice)?.action.clone();
        self.trajectory.record(choice);
        Some(action)
    }

    /// Chooses an action using the configured exploration constant
    pub fn choose(&mut self, state: &S) -> Option<S::Action> {
        self.choose_action(state, self.config.exploration_constant)
    }

    /// Backs `outcome_reward` up into every edge chosen since the last backup
    ///
    /// Each recorded choice applies one update with `decay_rate`, so an edge
    /// chosen twice in the episode is updated twice. The trajectory is empty
    /// afterwards.
    pub fn finish_episode(&mut self, outcome_reward: f64, decay_rate: f64) {
        let applied = self
            .trajectory
            .drain_and_clear(&mut self.table, outcome_reward, decay_rate);

        self.episodes += 1;
        self.backed_up += applied as u64;

        debug!(
            "episode {} finished with reward {:.4}, {} edges updated",
            self.episodes, outcome_reward, applied
        );
    }

    /// Finishes the episode using the configured decay rate
    pub fn finish(&mut self, outcome_reward: f64) {
        self.finish_episode(outcome_reward, self.config.decay_rate)
    }

    /// Returns the best feasible action for `state` without exploring
    ///
    /// Nothing is created or recorded. Ties go to the edge created first.
    pub fn best_action(&self, state: &S) -> Result<S::Action> {
        let edges = self
            .table
            .class(&state.key())
            .ok_or(UctError::UnvisitedState)?;

        let mut best: Option<&Edge<S::Action>> = None;
        for edge in edges.iter().filter(|edge| state.is_feasible(&edge.action)) {
            let better = match best {
                None => true,
                Some(current) => match self.config.best_action_criteria {
                    BestActionCriteria::MostVisits => edge.visits() > current.visits(),
                    BestActionCriteria::HighestReward => {
                        (current.visits() == 0 && edge.visits() > 0)
                            || (edge.visits() > 0 && edge.reward() > current.reward())
                    }
                },
            };

            if better {
                best = Some(edge);
            }
        }

        best.map(|edge| edge.action.clone())
            .ok_or(UctError::NoFeasibleActions)
    }

    /// Returns the edges of the class `state` belongs to, if visited
    pub fn edges(&self, state: &S) -> Option<&[Edge<S::Action>]> {
        self.table.class(&state.key())
    }

    /// Number of choices recorded since the last backup
    pub fn trajectory_len(&self) -> usize {
        self.trajectory.len()
    }

    /// Returns the underlying table
    pub fn table(&self) -> &TranspositionTable<S::Key, S::Action> {
        &self.table
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    /// Returns a snapshot of the table and episode statistics
    pub fn statistics(&self) -> TableStatistics {
        let classes = self.table.class_count();
        let edges = self.table.len();

        TableStatistics {
            classes,
            edges,
            hits: self.table.hits(),
            misses: self.table.misses(),
            episodes: self.episodes,
            backed_up: self.backed_up,
            estimated_bytes: TableStatistics::estimate_bytes::<S::Key, S::Action>(classes, edges),
        }
    }
}
