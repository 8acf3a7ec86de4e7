//! State identifiers and the per-state transition lists.
//!
//! A state owns its outgoing transitions in the order they were declared.
//! That order is the tie-break: the first transition whose guard matches wins.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a state within a [`Definition`](super::Definition).
///
/// # Example
///
/// ```rust
/// use pushdown::core::StateId;
///
/// let q0 = StateId::from("q0");
/// assert_eq!(q0.name(), "q0");
/// assert_eq!(q0.to_string(), "q0");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state id from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A state together with its ordered transitions.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct State {
    id: StateId,
    transitions: Vec<Transition>,
}

impl State {
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }

    pub(crate) fn push_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Select the first transition whose guard matches `(symbol, stack_top)`.
    ///
    /// Overlapping guards are allowed; earlier entries shadow later ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::builder::balanced_parentheses;
    ///
    /// let definition = balanced_parentheses();
    /// let q0 = definition.state(definition.initial()).unwrap();
    ///
    /// let t = q0.select('(', 'Z').unwrap();
    /// assert_eq!(t.push(), &['(', 'Z']);
    /// assert!(q0.select(')', 'Z').is_none());
    /// ```
    pub fn select(&self, symbol: char, stack_top: char) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.matches(symbol, stack_top))
    }
}
