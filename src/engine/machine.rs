//! Step-wise execution of a definition against one input word.

use crate::core::{Configuration, Definition, Stack, StackError, StateId, Trace};
use crate::engine::options::RunOptions;
use crate::engine::outcome::{Rejection, RunError, RunOutcome};

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// A transition fired; carries the resulting configuration
    Transitioned(Configuration),

    /// No transition matched; the run is over and the word rejected
    Rejected(Rejection),

    /// All input has been consumed; call `finish()` for the verdict
    Exhausted,
}

/// A single run of a definition against a word.
///
/// Each run owns its stack and trace; the definition is only borrowed, so
/// any number of runs may share one definition.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::balanced_parentheses;
/// use pushdown::engine::{Run, RunOptions, StepResult};
///
/// let definition = balanced_parentheses();
/// let mut run = Run::new(&definition, "()", &RunOptions::default()).unwrap();
///
/// assert!(matches!(run.step().unwrap(), StepResult::Transitioned(_)));
/// assert_eq!(run.configuration().stack, vec!['Z', '(']);
///
/// let outcome = run.finish().unwrap();
/// assert!(outcome.accepted);
/// ```
#[derive(Clone, Debug)]
pub struct Run<'d> {
    definition: &'d Definition,
    input: Vec<char>,
    state: StateId,
    position: usize,
    stack: Stack,
    trace: Trace,
    rejection: Option<Rejection>,
}

impl<'d> Run<'d> {
    /// Prepare a run: the stack holds only the bottom symbol and the
    /// machine sits in the initial state at position 0.
    pub fn new(
        definition: &'d Definition,
        word: &str,
        options: &RunOptions,
    ) -> Result<Self, RunError> {
        options.validate()?;

        let mut stack = Stack::with_capacity(options.stack_capacity);
        stack
            .push(definition.bottom_symbol())
            .map_err(|source| RunError::Stack {
                position: 0,
                source,
            })?;

        let state = definition.initial().clone();
        let initial = Configuration {
            state: state.clone(),
            position: 0,
            stack: stack.symbols().to_vec(),
        };

        tracing::trace!(word, initial = %initial, "starting run");

        Ok(Self {
            definition,
            input: word.chars().collect(),
            state,
            position: 0,
            stack,
            trace: Trace::new(initial),
            rejection: None,
        })
    }

    /// Current configuration (pure)
    pub fn configuration(&self) -> Configuration {
        Configuration {
            state: self.state.clone(),
            position: self.position,
            stack: self.stack.symbols().to_vec(),
        }
    }

    /// Trace recorded so far (pure)
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Whether the run has stopped on a rejection
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Execute one step.
    ///
    /// Selects the first transition of the current state matching the next
    /// input symbol and the stack top, applies it and records the result.
    /// Once rejected or exhausted, further calls keep returning the same answer.
    /// A stack fault leaves the run where it was, so retrying reports the
    /// same fault again.
    pub fn step(&mut self) -> Result<StepResult, RunError> {
        if let Some(rejection) = &self.rejection {
            return Ok(StepResult::Rejected(rejection.clone()));
        }

        let Some(&symbol) = self.input.get(self.position) else {
            return Ok(StepResult::Exhausted);
        };

        let position = self.position;
        let fault = move |source: StackError| RunError::Stack { position, source };

        let stack_top = self.stack.peek().map_err(fault)?;

        let definition = self.definition;
        let state = definition
            .state(&self.state)
            .ok_or_else(|| RunError::UnknownState {
                state: self.state.clone(),
            })?;

        let Some(transition) = state.select(symbol, stack_top) else {
            let rejection = Rejection::NoTransition {
                state: self.state.clone(),
                symbol,
                stack_top,
                position,
            };
            tracing::debug!(%rejection, "run rejected");
            self.rejection = Some(rejection.clone());
            return Ok(StepResult::Rejected(rejection));
        };

        // A fault must leave the configuration untouched.
        let mut stack = self.stack.clone();
        stack.pop().map_err(fault)?;
        for &pushed in transition.push().iter().rev() {
            stack.push(pushed).map_err(fault)?;
        }
        self.stack = stack;
        self.state = transition.to().clone();
        self.position += 1;

        let configuration = self.configuration();
        tracing::debug!(
            position,
            transition = %transition,
            configuration = %configuration,
            "fired transition"
        );
        self.trace.push(transition.clone(), configuration.clone());

        Ok(StepResult::Transitioned(configuration))
    }

    /// Run to completion and evaluate the acceptance predicate.
    ///
    /// A word is accepted iff all input is consumed, the machine is in a
    /// final state, and the stack holds exactly the bottom symbol.
    pub fn finish(mut self) -> Result<RunOutcome, RunError> {
        loop {
            match self.step()? {
                StepResult::Transitioned(_) => {}
                StepResult::Rejected(rejection) => {
                    return Ok(RunOutcome {
                        accepted: false,
                        trace: self.trace,
                        rejection: Some(rejection),
                    });
                }
                StepResult::Exhausted => break,
            }
        }

        let is_final = self.definition.is_final(&self.state);
        let accepted = is_final
            && self.stack.len() == 1
            && self.stack.peek() == Ok(self.definition.bottom_symbol());

        let rejection = if accepted {
            None
        } else {
            Some(Rejection::AcceptancePredicateFailed {
                state: self.state.clone(),
                is_final,
                stack: self.stack.symbols().to_vec(),
            })
        };

        tracing::debug!(
            accepted,
            state = %self.state,
            steps = self.trace.transitions().len(),
            "run finished"
        );

        Ok(RunOutcome {
            accepted,
            trace: self.trace,
            rejection,
        })
    }
}

/// Run `definition` against `word` with default options.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::balanced_parentheses;
/// use pushdown::engine::{run, Rejection};
///
/// let definition = balanced_parentheses();
///
/// let outcome = run(&definition, "(())").unwrap();
/// assert!(outcome.accepted);
/// assert_eq!(outcome.trace.transitions().len(), 4);
///
/// let outcome = run(&definition, ")").unwrap();
/// assert!(matches!(outcome.rejection, Some(Rejection::NoTransition { position: 0, .. })));
/// ```
pub fn run(definition: &Definition, word: &str) -> Result<RunOutcome, RunError> {
    run_with(definition, word, &RunOptions::default())
}

/// Run `definition` against `word` with explicit options.
pub fn run_with(
    definition: &Definition,
    word: &str,
    options: &RunOptions,
) -> Result<RunOutcome, RunError> {
    Run::new(definition, word, options)?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{balanced_parentheses, DefinitionBuilder, TransitionBuilder};

    fn stack(outcome: &RunOutcome) -> String {
        outcome.final_configuration().stack.iter().collect()
    }

    #[test]
    fn empty_word_accepts() {
        let outcome = run(&balanced_parentheses(), "").unwrap();

        assert!(outcome.accepted);
        assert!(outcome.rejection.is_none());
        assert_eq!(outcome.trace.configurations().len(), 1);
        assert_eq!(stack(&outcome), "Z");
    }

    #[test]
    fn nested_pair_accepts() {
        let outcome = run(&balanced_parentheses(), "(())").unwrap();

        assert!(outcome.accepted);
        assert_eq!(outcome.trace.transitions().len(), 4);
        assert_eq!(outcome.final_configuration().state, StateId::from("q0"));
        assert_eq!(stack(&outcome), "Z");

        let stacks: Vec<String> = outcome
            .trace
            .configurations()
            .iter()
            .map(|c| c.stack.iter().collect())
            .collect();
        assert_eq!(stacks, vec!["Z", "Z(", "Z((", "Z(", "Z"]);
    }

    #[test]
    fn single_open_fails_predicate() {
        let outcome = run(&balanced_parentheses(), "(").unwrap();

        assert!(!outcome.accepted);
        assert_eq!(
            outcome.rejection,
            Some(Rejection::AcceptancePredicateFailed {
                state: StateId::from("q0"),
                is_final: true,
                stack: vec!['Z', '('],
            })
        );
    }

    #[test]
    fn single_close_has_no_transition() {
        let outcome = run(&balanced_parentheses(), ")").unwrap();

        assert!(!outcome.accepted);
        assert_eq!(
            outcome.rejection,
            Some(Rejection::NoTransition {
                state: StateId::from("q0"),
                symbol: ')',
                stack_top: 'Z',
                position: 0,
            })
        );
        assert_eq!(outcome.trace.configurations().len(), 1);
    }

    #[test]
    fn premature_close_rejects_at_offending_position() {
        let outcome = run(&balanced_parentheses(), "())").unwrap();

        assert_eq!(
            outcome.rejection,
            Some(Rejection::NoTransition {
                state: StateId::from("q0"),
                symbol: ')',
                stack_top: 'Z',
                position: 2,
            })
        );
        assert_eq!(outcome.trace.transitions().len(), 2);
        assert_eq!(stack(&outcome), "Z");
    }

    #[test]
    fn foreign_symbols_are_not_skipped() {
        let outcome = run(&balanced_parentheses(), "(a)").unwrap();

        assert!(matches!(
            outcome.rejection,
            Some(Rejection::NoTransition {
                symbol: 'a',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn step_after_rejection_repeats_rejection() {
        let definition = balanced_parentheses();
        let mut run = Run::new(&definition, ")(", &RunOptions::default()).unwrap();

        let first = run.step().unwrap();
        let second = run.step().unwrap();
        assert!(matches!(first, StepResult::Rejected(_)));
        assert_eq!(first, second);
        assert!(run.is_rejected());
        assert_eq!(run.configuration().position, 0);
    }

    #[test]
    fn step_on_consumed_input_is_exhausted() {
        let definition = balanced_parentheses();
        let mut run = Run::new(&definition, "", &RunOptions::default()).unwrap();

        assert_eq!(run.step().unwrap(), StepResult::Exhausted);
        assert_eq!(run.trace().configurations().len(), 1);
    }

    #[test]
    fn deep_nesting_overflows_instead_of_truncating() {
        let options = RunOptions::default().with_stack_capacity(3);
        let outcome = run_with(&balanced_parentheses(), "(((", &options);

        assert_eq!(
            outcome.unwrap_err(),
            RunError::Stack {
                position: 2,
                source: StackError::Overflow {
                    capacity: 3,
                    symbol: '(',
                },
            }
        );
    }

    #[test]
    fn overflow_mid_push_leaves_configuration_intact() {
        let definition = DefinitionBuilder::new()
            .state("q0")
            .initial("q0")
            .final_state("q0")
            .transition(
                "q0",
                TransitionBuilder::new().read('a').pop('Z').push("ABZ").to("q0"),
            )
            .build()
            .unwrap();
        let options = RunOptions::default().with_stack_capacity(2);
        let mut run = Run::new(&definition, "a", &options).unwrap();
        let before = run.configuration();

        let expected = RunError::Stack {
            position: 0,
            source: StackError::Overflow {
                capacity: 2,
                symbol: 'A',
            },
        };
        assert_eq!(run.step().unwrap_err(), expected);
        assert_eq!(run.configuration(), before);
        assert_eq!(run.trace().transitions().len(), 0);

        // Stepping again reports the same fault, never a rejection
        assert_eq!(run.step().unwrap_err(), expected);
        assert!(!run.is_rejected());
        assert_eq!(run.finish().unwrap_err(), expected);
    }

    #[test]
    fn nesting_up_to_capacity_is_fine() {
        let options = RunOptions::default().with_stack_capacity(3);
        let outcome = run_with(&balanced_parentheses(), "(())", &options).unwrap();
        assert!(outcome.accepted);
    }

    #[test]
    fn popping_bottom_without_replacement_underflows() {
        let definition = DefinitionBuilder::new()
            .state("q0")
            .initial("q0")
            .final_state("q0")
            .transition("q0", TransitionBuilder::new().read('x').pop('Z').to("q0"))
            .build()
            .unwrap();

        let err = run(&definition, "xx").unwrap_err();
        assert_eq!(
            err,
            RunError::Stack {
                position: 1,
                source: StackError::Underflow,
            }
        );
    }

    #[test]
    fn empty_stack_after_last_symbol_fails_predicate() {
        let definition = DefinitionBuilder::new()
            .state("q0")
            .initial("q0")
            .final_state("q0")
            .transition("q0", TransitionBuilder::new().read('x').pop('Z').to("q0"))
            .build()
            .unwrap();

        let outcome = run(&definition, "x").unwrap();
        assert!(!outcome.accepted);
        assert!(matches!(
            outcome.rejection,
            Some(Rejection::AcceptancePredicateFailed { ref stack, .. }) if stack.is_empty()
        ));
    }

    #[test]
    fn zero_capacity_is_rejected_before_running() {
        let options = RunOptions::default().with_stack_capacity(0);
        let err = run_with(&balanced_parentheses(), "()", &options).unwrap_err();
        assert!(matches!(err, RunError::InvalidOptions(_)));
    }

    #[test]
    fn non_final_state_fails_predicate() {
        // a^n b^n with a distinct accepting state
        let definition = DefinitionBuilder::new()
            .state("reading")
            .state("matching")
            .state("accept")
            .initial("reading")
            .final_state("accept")
            .transition(
                "reading",
                TransitionBuilder::new().read('a').pop('Z').push("AZ").to("reading"),
            )
            .transition(
                "reading",
                TransitionBuilder::new().read('a').pop('A').push("AA").to("reading"),
            )
            .transition("reading", TransitionBuilder::new().read('b').pop('A').to("matching"))
            .transition("matching", TransitionBuilder::new().read('b').pop('A').to("matching"))
            .transition(
                "matching",
                TransitionBuilder::new().read('$').pop('Z').push("Z").to("accept"),
            )
            .build()
            .unwrap();

        let outcome = run(&definition, "aabb$").unwrap();
        assert!(outcome.accepted);
        let path: Vec<&str> = outcome.trace.get_path().iter().map(|s| s.name()).collect();
        assert_eq!(
            path,
            vec!["reading", "reading", "reading", "matching", "matching", "accept"]
        );

        let outcome = run(&definition, "aabb").unwrap();
        assert!(!outcome.accepted);
        assert!(matches!(
            outcome.rejection,
            Some(Rejection::AcceptancePredicateFailed { is_final: false, .. })
        ));
    }

    #[test]
    fn earlier_transition_shadows_later_one() {
        let definition = DefinitionBuilder::new()
            .state("q0")
            .state("first")
            .state("second")
            .initial("q0")
            .final_state("first")
            .final_state("second")
            .transition("q0", TransitionBuilder::new().read('a').pop('Z').push("Z").to("first"))
            .transition("q0", TransitionBuilder::new().read('a').pop('Z').push("Z").to("second"))
            .build()
            .unwrap();

        let outcome = run(&definition, "a").unwrap();
        assert_eq!(outcome.final_configuration().state, StateId::from("first"));
    }
}
