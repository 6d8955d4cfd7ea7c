//! Transposition table shared by all states of an equivalence class
//!
//! Edges live by value in a single arena and are addressed by [`EdgeId`].
//! Every class maps to the contiguous range of edges created on its first
//! visit, one per action, in the order the state reported them.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use log::trace;

use crate::{
    environment::DecisionState,
    node::{Edge, EdgeId},
};

/// Outcome of looking a state up in the table
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The class was unknown and its edges were just created
    Created {
        /// First feasible edge in enumeration order, if any
        default: Option<EdgeId>,
        /// Number of edges created
        count: usize,
    },

    /// The class already existed; these are its currently feasible edges
    Existing(FeasibleSet),
}

/// Edges of one class that are feasible for a particular state value
///
/// This is built for a single selection and dropped afterwards; feasibility
/// is never stored on the edges themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeasibleSet {
    ids: Vec<EdgeId>,
    parent_visits: u64,
}

impl FeasibleSet {
    /// Feasible edges, in creation order
    pub fn ids(&self) -> &[EdgeId] {
        &self.ids
    }

    /// Sum of the visit counts of the feasible edges
    pub fn parent_visits(&self) -> u64 {
        self.parent_visits
    }

    /// Returns true if no edge is feasible
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of feasible edges
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Arena of edges keyed by equivalence class
#[derive(Debug, Clone)]
pub struct TranspositionTable<K, A> {
    edges: Vec<Edge<A>>,
    classes: HashMap<K, Range<usize>>,
    hits: u64,
    misses: u64,
}

impl<K: Hash + Eq + Clone, A: Clone> TranspositionTable<K, A> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with room for `capacity` edges
    ///
    /// Only the edge arena is reserved; the class map grows on demand since
    /// the number of classes depends on the branching factor.
    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            edges: Vec::with_capacity(capacity),
            classes: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Finds the class of `state`, creating its edges on first visit
    ///
    /// On first visit no scores are compared: the first action `state`
    /// reports feasible is returned as the default. On later visits the
    /// feasibility of every edge is evaluated against `state` as it is now.
    pub fn lookup_or_create<S>(&mut self, state: &S) -> Lookup
    where
        S: DecisionState<Key = K, Action = A>,
    {
        let key = state.key();

        if let Some(range) = self.classes.get(&key) {
            self.hits += 1;

            let mut feasible = FeasibleSet::default();
            for index in range.clone() {
                let edge = &self.edges[index];
                if state.is_feasible(&edge.action) {
                    feasible.parent_visits += edge.visits();
                    feasible.ids.push(EdgeId(index));
                }
            }
            return Lookup::Existing(feasible);
        }

        self.misses += 1;

        let start = self.edges.len();
        let mut default = None;
        for action in state.actions() {
            if default.is_none() && state.is_feasible(&action) {
                default = Some(EdgeId(self.edges.len()));
            }
            self.edges.push(Edge::new(action));
        }
        let end = self.edges.len();

        trace!("new class with {} edges at {}..{}", end - start, start, end);
        self.classes.insert(key, start..end);

        Lookup::Created {
            default,
            count: end - start,
        }
    }

    /// Returns the edges of the class `key`, if it has been visited
    pub fn class(&self, key: &K) -> Option<&[Edge<A>]> {
        self.classes.get(key).map(|range| &self.edges[range.clone()])
    }

    /// Returns true if the class `key` has been visited
    pub fn contains(&self, key: &K) -> bool {
        self.classes.contains_key(key)
    }

    /// All edges, indexed by [`EdgeId::index`]
    pub fn edges(&self) -> &[Edge<A>] {
        &self.edges
    }

    /// Returns the edge behind `id`
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<A>> {
        self.edges.get(id.0)
    }

    /// Returns the edge behind `id` for updating
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<A>> {
        self.edges.get_mut(id.0)
    }

    /// Total number of edges in the table
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge has been created yet
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges the arena holds without reallocating
    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }

    /// Number of equivalence classes visited so far
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Lookups that found an existing class
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that created a new class
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: Hash + Eq + Clone, A: Clone> Default for TranspositionTable<K, A> {
    fn default() -> Self {
        Self::new()
    }
}
