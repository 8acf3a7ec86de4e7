//! Builder API for validated definition construction.
//!
//! Definitions can only be created through [`DefinitionBuilder`], which
//! rejects dangling state references before any run starts.

pub mod definition;
pub mod error;
pub mod transition;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::Definition;

/// Id of the single state of [`balanced_parentheses`].
pub const BALANCED_STATE: &str = "q0";

/// The balanced-parentheses automaton.
///
/// One state `q0`, both initial and final, with the stack-bottom sentinel `Z`.
/// There is deliberately no rule for `)` over `Z`: a closer with no open
/// parenthesis below it has nothing to match and the run must reject.
///
/// # Example
///
/// ```
/// use pushdown::builder::balanced_parentheses;
/// use pushdown::engine::run;
///
/// let definition = balanced_parentheses();
/// assert!(run(&definition, "(()())").unwrap().accepted);
/// assert!(!run(&definition, "())(").unwrap().accepted);
/// ```
pub fn balanced_parentheses() -> Definition {
    DefinitionBuilder::new()
        .state(BALANCED_STATE)
        .initial(BALANCED_STATE)
        .final_state(BALANCED_STATE)
        .transition(
            BALANCED_STATE,
            TransitionBuilder::new()
                .read('(')
                .pop('Z')
                .push("(Z")
                .to(BALANCED_STATE),
        )
        .transition(
            BALANCED_STATE,
            TransitionBuilder::new()
                .read('(')
                .pop('(')
                .push("((")
                .to(BALANCED_STATE),
        )
        .transition(
            BALANCED_STATE,
            TransitionBuilder::new()
                .read(')')
                .pop('(')
                .push_nothing()
                .to(BALANCED_STATE),
        )
        .build()
        .expect("Balanced parentheses definition should always build")
}
