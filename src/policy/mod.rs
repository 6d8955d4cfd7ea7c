//! Policies used by the engine
//!
//! Selection policies decide which feasible edge to take on a repeat visit.

pub mod selection;

pub use selection::{SelectionPolicy, UCB1Policy};
