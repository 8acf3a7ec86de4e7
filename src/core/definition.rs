//! Immutable automaton definitions.

use super::state::{State, StateId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Default stack-bottom sentinel.
pub const DEFAULT_BOTTOM: char = 'Z';

/// A complete pushdown automaton: states with ordered transitions, an
/// initial state, final states and the stack-bottom sentinel.
///
/// Definitions are only produced by
/// [`DefinitionBuilder`](crate::builder::DefinitionBuilder), which checks that
/// every referenced state exists. Once built they are never mutated and can
/// be shared across any number of runs. Definitions can be exported with
/// serde but not loaded back; the builder is the only way in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Definition {
    pub(crate) states: HashMap<StateId, State>,
    pub(crate) initial: StateId,
    pub(crate) finals: HashSet<StateId>,
    pub(crate) bottom: char,
}

impl Definition {
    /// True iff `state` is one of the final states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::builder::balanced_parentheses;
    /// use pushdown::core::StateId;
    ///
    /// let definition = balanced_parentheses();
    /// assert!(definition.is_final(&StateId::from("q0")));
    /// assert!(!definition.is_final(&StateId::from("q1")));
    /// ```
    pub fn is_final(&self, state: &StateId) -> bool {
        self.finals.contains(state)
    }

    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// Symbol placed on the stack before any input is read.
    pub fn bottom_symbol(&self) -> char {
        self.bottom
    }

    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub fn final_states(&self) -> impl Iterator<Item = &StateId> {
        self.finals.iter()
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.values().map(|s| s.transitions().len()).sum()
    }
}
