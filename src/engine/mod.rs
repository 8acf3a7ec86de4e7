//! Execution engine.
//!
//! Runs a [`Definition`](crate::core::Definition) against an input word and
//! produces a [`RunOutcome`]: the verdict, the full trace and, on rejection,
//! the reason.
//!
//! # Key Concepts
//!
//! - **Rejection** is an ordinary value inside the outcome
//! - **Faults** (stack bound violations, broken definitions) are `Err(RunError)`
//! - **Runs** are synchronous and own all their mutable state; rendering or
//!   pacing happens afterwards, on the finished trace

mod machine;
mod options;
mod outcome;

pub use machine::{run, run_with, Run, StepResult};
pub use options::RunOptions;
pub use outcome::{Rejection, RunError, RunOutcome};
