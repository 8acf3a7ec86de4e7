//! Build errors for automaton definitions and transitions.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building definitions and transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{state}' is not a declared state")]
    UnknownInitialState { state: StateId },

    #[error("Final state '{state}' is not a declared state")]
    UnknownFinalState { state: StateId },

    #[error("State '{state}' declared more than once")]
    DuplicateState { state: StateId },

    #[error("Transition source '{state}' is not a declared state")]
    UnknownSourceState { state: StateId },

    #[error("Transition from '{from}' targets undeclared state '{to}'")]
    UnknownTargetState { from: StateId, to: StateId },

    #[error("Transition read symbol not specified. Call .read(symbol)")]
    MissingReadSymbol,

    #[error("Transition pop symbol not specified. Call .pop(symbol)")]
    MissingPopSymbol,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("{} problems in definition: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<BuildError>),
}

impl BuildError {
    /// Every individual problem this error stands for.
    pub fn problems(&self) -> Vec<&BuildError> {
        match self {
            Self::Multiple(errors) => errors.iter().collect(),
            single => vec![single],
        }
    }
}

fn join_messages(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_lists_every_message() {
        let err = BuildError::Multiple(vec![
            BuildError::MissingInitialState,
            BuildError::UnknownFinalState {
                state: StateId::from("q9"),
            },
        ]);

        let message = err.to_string();
        assert!(message.starts_with("2 problems in definition"));
        assert!(message.contains("Initial state not specified"));
        assert!(message.contains("'q9'"));
        assert_eq!(err.problems().len(), 2);
    }

    #[test]
    fn single_error_is_its_own_problem() {
        let err = BuildError::MissingToState;
        assert_eq!(err.problems(), vec![&BuildError::MissingToState]);
    }
}
