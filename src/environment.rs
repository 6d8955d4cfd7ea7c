//! Traits describing the decision process driven by the engine.
//!
//! The `DecisionState` trait is the only interface a caller must implement to
//! use [`UctEngine`](crate::UctEngine). It tells the engine which states are
//! interchangeable, which actions exist and which of them may be taken right now.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait defining the state interface required by the engine
///
/// Two states belong to the same equivalence class when their keys are equal.
/// Every statistic the engine keeps is shared across an equivalence class, so
/// the key should capture exactly the information that matters for choosing
/// an action and nothing more.
pub trait DecisionState {
    /// The type of actions that can be taken from this state
    type Action: Clone + Debug;

    /// The equivalence-class key of a state
    type Key: Hash + Eq + Clone + Debug;

    /// Returns the key identifying this state's equivalence class
    ///
    /// # Example
    ///
    /// ```
    /// # use tabular_uct::DecisionState;
    /// #[derive(Clone)]
    /// struct Walk { target: f64, position: i32 }
    ///
    /// impl DecisionState for Walk {
    ///     type Action = i32;
    ///     // Only the rounded target and the position matter for decisions
    ///     type Key = (i64, i32);
    ///
    ///     fn key(&self) -> Self::Key {
    ///         ((self.target * 100.0).round() as i64, self.position)
    ///     }
    /// #   fn actions(&self) -> Vec<i32> { vec![-1, 1] }
    /// #   fn is_feasible(&self, _: &i32) -> bool { true }
    /// }
    /// ```
    fn key(&self) -> Self::Key;

    /// Returns every action that exists from this state
    ///
    /// The list must be finite and come back in the same order every time it is
    /// requested for states of the same equivalence class. The engine reads it
    /// once, on the first visit to a class, and never reconciles it afterwards.
    fn actions(&self) -> Vec<Self::Action>;

    /// Returns true if `action` may be taken from this particular state
    ///
    /// This is evaluated anew on every selection, so it may differ between two
    /// states of the same equivalence class.
    fn is_feasible(&self, action: &Self::Action) -> bool;
}
