//! Transition rules of a pushdown automaton.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single transition rule.
///
/// On reading `read` while `pop` is on top of the stack, the top is popped,
/// `push` is pushed and the machine moves to `to`. The first symbol of `push`
/// ends up on top of the stack. An empty `push` is the ε action.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{StateId, Transition};
///
/// let open = Transition::new('(', 'Z', vec!['(', 'Z'], StateId::from("q0"));
///
/// assert!(open.matches('(', 'Z'));
/// assert!(!open.matches(')', 'Z'));
/// assert_eq!(open.to_string(), "('(', Z) -> ((Z, q0)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    read: char,
    pop: char,
    push: Vec<char>,
    to: StateId,
}

impl Transition {
    pub fn new(read: char, pop: char, push: Vec<char>, to: StateId) -> Self {
        Self {
            read,
            pop,
            push,
            to,
        }
    }

    /// Input symbol consumed by this transition.
    pub fn read(&self) -> char {
        self.read
    }

    /// Stack symbol that must be on top, and is popped.
    pub fn pop(&self) -> char {
        self.pop
    }

    /// Symbols pushed after the pop, top-first.
    pub fn push(&self) -> &[char] {
        &self.push
    }

    pub fn to(&self) -> &StateId {
        &self.to
    }

    /// Check the `(read, pop)` guard against the current input symbol and stack top (pure).
    pub fn matches(&self, symbol: char, stack_top: char) -> bool {
        self.read == symbol && self.pop == stack_top
    }

    /// Whether the transition pushes nothing.
    pub fn is_epsilon_push(&self) -> bool {
        self.push.is_empty()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {}) -> (", self.read, self.pop)?;
        if self.push.is_empty() {
            f.write_str("ε")?;
        } else {
            for symbol in &self.push {
                write!(f, "{symbol}")?;
            }
        }
        write!(f, ", {})", self.to)
    }
}
