//! Bounded LIFO stack of automaton symbols.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Errors raised by stack bound violations.
///
/// Neither can happen for a well-formed definition and input within its
/// alphabet, so they are treated as faults rather than rejections.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackError {
    #[error("Stack overflow: pushing '{symbol}' exceeds capacity {capacity}")]
    Overflow { capacity: usize, symbol: char },

    #[error("Stack underflow: no symbol on an empty stack")]
    Underflow,
}

/// Stack with a fixed upper bound on the number of symbols.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Stack, StackError};
///
/// let mut stack = Stack::with_capacity(2);
/// stack.push('Z').unwrap();
/// stack.push('(').unwrap();
///
/// assert_eq!(stack.push('('), Err(StackError::Overflow { capacity: 2, symbol: '(' }));
/// assert_eq!(stack.pop(), Ok('('));
/// assert_eq!(stack.peek(), Ok('Z'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    symbols: Vec<char>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Stack {
    /// Create an empty stack holding at most `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Push `symbol` on top.
    pub fn push(&mut self, symbol: char) -> Result<(), StackError> {
        if self.symbols.len() >= self.capacity {
            return Err(StackError::Overflow {
                capacity: self.capacity,
                symbol,
            });
        }
        self.symbols.push(symbol);
        Ok(())
    }

    /// Remove and return the top symbol.
    pub fn pop(&mut self) -> Result<char, StackError> {
        self.symbols.pop().ok_or(StackError::Underflow)
    }

    /// Return the top symbol without removing it.
    pub fn peek(&self) -> Result<char, StackError> {
        self.symbols.last().copied().ok_or(StackError::Underflow)
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Symbols from bottom to top.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut stack = Stack::default();
        stack.push('Z').unwrap();
        stack.push('(').unwrap();
        stack.push('[').unwrap();

        assert_eq!(stack.symbols(), &['Z', '(', '[']);
        assert_eq!(stack.pop(), Ok('['));
        assert_eq!(stack.pop(), Ok('('));
        assert_eq!(stack.pop(), Ok('Z'));
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::default();
        stack.push('Z').unwrap();

        assert_eq!(stack.peek(), Ok('Z'));
        assert_eq!(stack.peek(), Ok('Z'));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_on_empty_underflows() {
        let mut stack = Stack::default();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn peek_on_empty_underflows() {
        let stack = Stack::default();
        assert_eq!(stack.peek(), Err(StackError::Underflow));
    }

    #[test]
    fn push_beyond_capacity_overflows_and_keeps_contents() {
        let mut stack = Stack::with_capacity(3);
        for symbol in ['Z', '(', '('] {
            stack.push(symbol).unwrap();
        }

        let err = stack.push('x').unwrap_err();
        assert_eq!(
            err,
            StackError::Overflow {
                capacity: 3,
                symbol: 'x'
            }
        );
        assert_eq!(stack.symbols(), &['Z', '(', '(']);
    }

    #[test]
    fn zero_capacity_rejects_every_push() {
        let mut stack = Stack::with_capacity(0);
        assert!(matches!(stack.push('Z'), Err(StackError::Overflow { .. })));
    }

    #[test]
    fn overflow_message_names_capacity() {
        let err = StackError::Overflow {
            capacity: 100,
            symbol: '(',
        };
        assert_eq!(
            err.to_string(),
            "Stack overflow: pushing '(' exceeds capacity 100"
        );
    }
}
