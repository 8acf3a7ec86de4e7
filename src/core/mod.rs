//! Core automaton types.
//!
//! This module contains the data model of the pushdown automaton:
//! - `Definition`: the immutable transition table
//! - `State` / `StateId`: states and their ordered transitions
//! - `Stack`: bounded symbol storage used during a run
//! - `Trace` / `Configuration`: the record of a run
//!
//! Nothing here performs I/O.

mod definition;
mod stack;
mod state;
mod trace;
mod transition;

pub use definition::{Definition, DEFAULT_BOTTOM};
pub use stack::{Stack, StackError, DEFAULT_CAPACITY};
pub use state::{State, StateId};
pub use trace::{Configuration, Step, Trace, TraceError};
pub use transition::Transition;
