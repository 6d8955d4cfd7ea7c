//! Statistics about the engine's table and episodes
//!
//! Nothing here is printed by the engine itself; callers decide when and how
//! to report it.

use std::mem::size_of;
use std::ops::Range;

use crate::node::Edge;

/// Snapshot of the engine's size and activity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStatistics {
    /// Number of equivalence classes visited
    pub classes: usize,

    /// Number of edges in the table
    pub edges: usize,

    /// Lookups that found an existing class
    pub hits: u64,

    /// Lookups that created a new class
    pub misses: u64,

    /// Number of `finish_episode` calls
    pub episodes: u64,

    /// Total number of edge updates applied by backups
    pub backed_up: u64,

    /// Estimated resident size of the table in bytes
    pub estimated_bytes: usize,
}

impl TableStatistics {
    /// Estimates the bytes held by `edges` edges spread over `classes` classes
    ///
    /// Counts the edge arena and one key plus range per class. Heap memory
    /// owned by keys or actions and hash map overhead are not included.
    pub fn estimate_bytes<K, A>(classes: usize, edges: usize) -> usize {
        edges * size_of::<Edge<A>>() + classes * (size_of::<K>() + size_of::<Range<usize>>())
    }

    /// Fraction of lookups that found an existing class
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / lookups as f64
    }

    /// Average number of edges per class
    pub fn branching_factor(&self) -> f64 {
        if self.classes == 0 {
            return 0.0;
        }
        self.edges as f64 / self.classes as f64
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "UCT Table Statistics:\n\
             - Episodes: {}\n\
             - Edge updates: {}\n\
             - Classes: {}\n\
             - Edges: {}\n\
             - Branching factor: {:.2}\n\
             - Hit rate: {:.3}\n\
             - Memory usage: {}",
            self.episodes,
            self.backed_up,
            self.classes,
            self.edges,
            self.branching_factor(),
            self.hit_rate(),
            format_bytes(self.estimated_bytes)
        )
    }
}

/// Formats a byte count with a binary unit, e.g. `1.50MB`
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2}{}", value, UNITS[unit])
}
