//! Execution traces.
//!
//! A trace records every instantaneous description of a run together with
//! the transition that moved the machine from each configuration to the next.

use super::state::StateId;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Instantaneous description of a run: state, input position and stack.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Configuration, StateId};
///
/// let config = Configuration {
///     state: StateId::from("q0"),
///     position: 1,
///     stack: vec!['Z', '('],
/// };
///
/// assert_eq!(config.stack_top(), Some('('));
/// assert_eq!(config.to_string(), "(q0, 1, [Z (])");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Current state
    pub state: StateId,
    /// Number of input symbols consumed so far
    pub position: usize,
    /// Stack contents, bottom first
    pub stack: Vec<char>,
}

impl Configuration {
    pub fn stack_top(&self) -> Option<char> {
        self.stack.last().copied()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, [", self.state, self.position)?;
        for (i, symbol) in self.stack.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("])")
    }
}

/// One fired transition with the configurations on either side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step<'a> {
    pub from: &'a Configuration,
    pub transition: &'a Transition,
    pub to: &'a Configuration,
}

/// Reasons a deserialized trace is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("Trace has no initial configuration")]
    Empty,

    #[error("Trace has {configurations} configurations for {transitions} transitions")]
    LengthMismatch {
        configurations: usize,
        transitions: usize,
    },
}

/// Ordered record of a run.
///
/// Always starts with the initial configuration; each recorded transition
/// adds the configuration it produced. Deserialization enforces the same
/// shape, so `initial()` and `last()` never fail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrace")]
pub struct Trace {
    configurations: Vec<Configuration>,
    transitions: Vec<Transition>,
}

/// Unchecked wire form of a [`Trace`].
#[derive(Deserialize)]
struct RawTrace {
    configurations: Vec<Configuration>,
    transitions: Vec<Transition>,
}

impl TryFrom<RawTrace> for Trace {
    type Error = TraceError;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        if raw.configurations.is_empty() {
            return Err(TraceError::Empty);
        }
        if raw.configurations.len() != raw.transitions.len() + 1 {
            return Err(TraceError::LengthMismatch {
                configurations: raw.configurations.len(),
                transitions: raw.transitions.len(),
            });
        }
        Ok(Self {
            configurations: raw.configurations,
            transitions: raw.transitions,
        })
    }
}

impl Trace {
    /// Start a trace at `initial`.
    pub fn new(initial: Configuration) -> Self {
        Self {
            configurations: vec![initial],
            transitions: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, transition: Transition, configuration: Configuration) {
        self.transitions.push(transition);
        self.configurations.push(configuration);
    }

    /// All configurations, initial first.
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Fired transitions, one fewer than configurations.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn initial(&self) -> &Configuration {
        &self.configurations[0]
    }

    /// The most recent configuration.
    pub fn last(&self) -> &Configuration {
        let last = self.configurations.len() - 1;
        &self.configurations[last]
    }

    /// Iterate over fired transitions with their surrounding configurations.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.transitions
            .iter()
            .enumerate()
            .map(move |(i, transition)| Step {
                from: &self.configurations[i],
                transition,
                to: &self.configurations[i + 1],
            })
    }

    /// States visited in order, including the initial state.
    pub fn get_path(&self) -> Vec<&StateId> {
        self.configurations.iter().map(|c| &c.state).collect()
    }
}
