//! Per-run configuration.

use crate::core::DEFAULT_CAPACITY;
use crate::engine::outcome::RunError;
use serde::{Deserialize, Serialize};

/// Options controlling a single run.
///
/// # Example
///
/// ```rust
/// use pushdown::engine::RunOptions;
///
/// let options = RunOptions::default().with_stack_capacity(8);
/// assert_eq!(options.stack_capacity, 8);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Maximum number of symbols on the stack, sentinel included
    pub stack_capacity: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RunOptions {
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    /// Reject options no run could start with.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.stack_capacity == 0 {
            return Err(RunError::InvalidOptions(
                "stack capacity must leave room for the bottom symbol".to_string(),
            ));
        }
        Ok(())
    }
}
