//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{StateId, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// The push sequence defaults to ε (push nothing).
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    read: Option<char>,
    pop: Option<char>,
    push: Vec<char>,
    to: Option<StateId>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input symbol (required).
    pub fn read(mut self, symbol: char) -> Self {
        self.read = Some(symbol);
        self
    }

    /// Set the stack symbol that must be on top (required).
    pub fn pop(mut self, symbol: char) -> Self {
        self.pop = Some(symbol);
        self
    }

    /// Set the pushed symbols; the first character ends up on top.
    pub fn push(mut self, symbols: &str) -> Self {
        self.push = symbols.chars().collect();
        self
    }

    /// Push nothing after the pop.
    pub fn push_nothing(mut self) -> Self {
        self.push.clear();
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let read = self.read.ok_or(BuildError::MissingReadSymbol)?;
        let pop = self.pop.ok_or(BuildError::MissingPopSymbol)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition::new(read, pop, self.push, to))
    }
}
