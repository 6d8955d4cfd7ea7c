//! Selection policies for the engine
//!
//! A selection policy picks one edge among those feasible for the current
//! state on a repeat visit. First visits never reach a policy: the table
//! hands back its deterministic default instead.

use crate::{
    node::{Edge, EdgeId},
    table::FeasibleSet,
};

/// Trait for policies that choose an edge among the feasible ones
pub trait SelectionPolicy<A> {
    /// Selects one of `feasible`, or `None` if it is empty
    ///
    /// `edges` is the whole arena, indexed by [`EdgeId::index`].
    fn select_edge(
        &self,
        edges: &[Edge<A>],
        feasible: &FeasibleSet,
        exploration_constant: f64,
    ) -> Option<EdgeId>;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SelectionPolicy<A>>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// Scores every feasible edge with [`Edge::score`]:
///
/// ```text
/// UCB1 = reward + exploration_constant * sqrt(ln(parent_visits) / visits)
/// ```
///
/// where `parent_visits` sums the visits of the feasible edges only. Unvisited
/// edges score infinity. The strictly greatest score wins; ties go to the edge
/// created first. NaN scores never win against a comparable score.
#[derive(Debug, Clone, Copy, Default)]
pub struct UCB1Policy;

impl UCB1Policy {
    /// Creates a new UCB1 policy
    pub fn new() -> Self {
        UCB1Policy
    }
}

impl<A> SelectionPolicy<A> for UCB1Policy {
    fn select_edge(
        &self,
        edges: &[Edge<A>],
        feasible: &FeasibleSet,
        exploration_constant: f64,
    ) -> Option<EdgeId> {
        let parent_visits = feasible.parent_visits();
        let mut best_score = f64::NEG_INFINITY;
        let mut best = None;

        for &id in feasible.ids() {
            let score = edges[id.index()].score(parent_visits, exploration_constant);
            if score.is_nan() {
                continue;
            }

            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(id);
            }
        }

        // Every score was NaN: fall back to the first feasible edge
        best.or_else(|| feasible.ids().first().copied())
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<A>> {
        Box::new(*self)
    }
}

impl<A> SelectionPolicy<A> for Box<dyn SelectionPolicy<A>> {
    fn select_edge(
        &self,
        edges: &[Edge<A>],
        feasible: &FeasibleSet,
        exploration_constant: f64,
    ) -> Option<EdgeId> {
        (**self).select_edge(edges, feasible, exploration_constant)
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<A>> {
        (**self).clone_box()
    }
}
