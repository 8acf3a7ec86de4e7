//! Run verdicts, rejection reasons and run faults.

use crate::core::{Configuration, StackError, StateId, Trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a word was not accepted.
///
/// Rejection is an ordinary result, not a fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No transition of `state` matches the input symbol and stack top
    NoTransition {
        state: StateId,
        symbol: char,
        stack_top: char,
        position: usize,
    },

    /// All input consumed, but the machine is not in a final state with
    /// only the bottom symbol left on the stack
    AcceptancePredicateFailed {
        state: StateId,
        is_final: bool,
        stack: Vec<char>,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransition {
                state,
                symbol,
                stack_top,
                position,
            } => write!(
                f,
                "no transition from state {state} with input '{symbol}' and stack top '{stack_top}' at position {position}"
            ),
            Self::AcceptancePredicateFailed {
                state,
                is_final,
                stack,
            } => {
                let stack: String = stack.iter().collect();
                write!(
                    f,
                    "input consumed in state {state} (final: {is_final}) with stack [{stack}]"
                )
            }
        }
    }
}

/// Faults that stop a run. These indicate a malformed definition or a
/// stack bound violation, never an ordinary rejection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RunError {
    #[error("Stack fault at input position {position}: {source}")]
    Stack {
        position: usize,
        #[source]
        source: StackError,
    },

    #[error("State '{state}' is not part of the definition")]
    UnknownState { state: StateId },

    #[error("Invalid run options: {0}")]
    InvalidOptions(String),
}

/// Result of running a definition against a word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub accepted: bool,
    pub trace: Trace,
    /// `None` iff `accepted`
    pub rejection: Option<Rejection>,
}

impl RunOutcome {
    pub fn final_configuration(&self) -> &Configuration {
        self.trace.last()
    }
}
