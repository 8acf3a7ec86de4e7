//! Pushdown: a deterministic pushdown automaton engine
//!
//! The engine is a pure function of a definition and an input word: it
//! performs no I/O and returns the whole run as a value. Rendering, pacing
//! and prompting belong to the caller.
//!
//! # Core Concepts
//!
//! - **Definition**: immutable, validated table of states and ordered transitions
//! - **Run**: one execution with its own bounded stack
//! - **Trace**: every configuration the run passed through
//! - **Rejection vs. fault**: an unaccepted word is a normal outcome; stack
//!   bound violations are errors
//!
//! # Example
//!
//! ```rust
//! use pushdown::builder::balanced_parentheses;
//! use pushdown::engine::{run, Rejection};
//!
//! let definition = balanced_parentheses();
//!
//! let outcome = run(&definition, "(()").unwrap();
//! assert!(!outcome.accepted);
//! assert_eq!(outcome.final_configuration().stack, vec!['Z', '(']);
//! assert!(matches!(
//!     outcome.rejection,
//!     Some(Rejection::AcceptancePredicateFailed { .. })
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use builder::{balanced_parentheses, BuildError, DefinitionBuilder, TransitionBuilder};
pub use crate::core::{Configuration, Definition, StateId, Trace, Transition};
pub use engine::{run, run_with, Rejection, RunError, RunOptions, RunOutcome};
