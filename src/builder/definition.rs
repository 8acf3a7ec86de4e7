//! Builder for constructing automaton definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Definition, State, StateId, DEFAULT_BOTTOM};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing definitions with a fluent API.
///
/// Problems are collected rather than reported one at a time: `build()`
/// checks every state reference and returns all failures together.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::{DefinitionBuilder, TransitionBuilder};
///
/// // a^n b^n, n >= 1
/// let definition = DefinitionBuilder::new()
///     .state("push")
///     .state("pop")
///     .state("done")
///     .initial("push")
///     .final_state("done")
///     .transition("push", TransitionBuilder::new().read('a').pop('Z').push("AZ").to("push"))
///     .transition("push", TransitionBuilder::new().read('a').pop('A').push("AA").to("push"))
///     .transition("push", TransitionBuilder::new().read('b').pop('A').to("pop"))
///     .transition("pop", TransitionBuilder::new().read('b').pop('A').to("pop"))
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.transition_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DefinitionBuilder {
    states: Vec<StateId>,
    initial: Option<StateId>,
    finals: Vec<StateId>,
    bottom: char,
    transitions: Vec<(StateId, TransitionBuilder)>,
}

impl DefinitionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            finals: Vec::new(),
            bottom: DEFAULT_BOTTOM,
            transitions: Vec::new(),
        }
    }

    /// Declare a state. Each id may be declared once.
    pub fn state(mut self, id: impl Into<StateId>) -> Self {
        self.states.push(id.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<StateId>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, id: impl Into<StateId>) -> Self {
        self.finals.push(id.into());
        self
    }

    /// Override the stack-bottom sentinel (defaults to `Z`).
    pub fn bottom_symbol(mut self, symbol: char) -> Self {
        self.bottom = symbol;
        self
    }

    /// Append a transition to `from`'s list. Order of calls is selection order.
    pub fn transition(mut self, from: impl Into<StateId>, builder: TransitionBuilder) -> Self {
        self.transitions.push((from.into(), builder));
        self
    }

    /// Build the definition.
    /// Returns every problem found if any state reference is invalid.
    pub fn build(self) -> Result<Definition, BuildError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        let mut states: HashMap<StateId, State> = HashMap::new();
        for id in self.states {
            if states.contains_key(&id) {
                checks.push(Validation::fail(BuildError::DuplicateState { state: id }));
            } else {
                states.insert(id.clone(), State::new(id));
            }
        }

        match &self.initial {
            None => checks.push(Validation::fail(BuildError::MissingInitialState)),
            Some(id) if !states.contains_key(id) => {
                checks.push(Validation::fail(BuildError::UnknownInitialState {
                    state: id.clone(),
                }));
            }
            Some(_) => {}
        }

        let mut finals = HashSet::new();
        for id in self.finals {
            if states.contains_key(&id) {
                finals.insert(id);
            } else {
                checks.push(Validation::fail(BuildError::UnknownFinalState { state: id }));
            }
        }

        for (from, builder) in self.transitions {
            let transition = match builder.build() {
                Ok(transition) => transition,
                Err(err) => {
                    checks.push(Validation::fail(err));
                    continue;
                }
            };

            if !states.contains_key(transition.to()) {
                checks.push(Validation::fail(BuildError::UnknownTargetState {
                    from: from.clone(),
                    to: transition.to().clone(),
                }));
            }

            match states.get_mut(&from) {
                Some(state) => state.push_transition(transition),
                None => checks.push(Validation::fail(BuildError::UnknownSourceState {
                    state: from,
                })),
            }
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks) {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            if errors.len() == 1 {
                return Err(errors.remove(0));
            }
            return Err(BuildError::Multiple(errors));
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        tracing::debug!(
            initial = %initial,
            states = states.len(),
            finals = finals.len(),
            "built pushdown definition"
        );

        Ok(Definition {
            states,
            initial,
            finals,
            bottom: self.bottom,
        })
    }
}

impl Default for DefinitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
