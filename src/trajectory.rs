//! Record of the edges chosen during the current episode

use log::warn;

use crate::{node::EdgeId, table::TranspositionTable};

/// Ordered, non-owning record of the decisions taken in one episode
///
/// Edges stay owned by the [`TranspositionTable`]; the trajectory only keeps
/// their ids. The same edge may appear several times and each occurrence is
/// backed up separately.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    path: Vec<EdgeId>,
}

impl Trajectory {
    /// Creates an empty trajectory
    pub fn new() -> Self {
        Trajectory { path: Vec::new() }
    }

    /// Appends a chosen edge
    pub fn record(&mut self, id: EdgeId) {
        self.path.push(id);
    }

    /// Backs `observed_reward` up into every recorded edge and empties the record
    ///
    /// Every occurrence receives the same outcome with no depth weighting.
    /// Returns the number of updates applied; ids that `table` does not hold
    /// are logged and skipped.
    pub fn drain_and_clear<K, A>(
        &mut self,
        table: &mut TranspositionTable<K, A>,
        observed_reward: f64,
        decay_rate: f64,
    ) -> usize
    where
        K: std::hash::Hash + Eq + Clone,
        A: Clone,
    {
        let mut applied = 0;
        for id in self.path.drain(..) {
            match table.edge_mut(id) {
                Some(edge) => {
                    edge.update(observed_reward, decay_rate);
                    applied += 1;
                }
                None => warn!("edge {} is not in this table, skipping its backup", id),
            }
        }
        applied
    }

    /// The recorded edges, oldest first
    pub fn path(&self) -> &[EdgeId] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
