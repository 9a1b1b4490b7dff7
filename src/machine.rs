//! Runner that replays a transition table over a token sequence.

use crate::core::{RunHistory, StackError, Stacks, State, StepRecord};
use crate::table::TransitionTable;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running the automaton.
///
/// Tables accepted by the builder cannot produce these; seeing one means the
/// table was corrupted after validation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Stack fault in transition ({from}, '{word}'): {source}")]
    Stack {
        from: String,
        word: String,
        #[source]
        source: StackError,
    },
}

/// Everything a run produced: final state, stacks, and fired steps.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct Run<S: State> {
    pub final_state: S,
    pub stacks: Stacks,
    pub history: RunHistory<S>,
}

impl<S: State> Run<S> {
    /// Check if the run ended in a recognized state (pure)
    pub fn is_final(&self) -> bool {
        self.final_state.is_final()
    }
}

/// Replays a table one token at a time. Holds no per-run state, so one runner
/// can serve any number of concurrent runs.
#[derive(Clone, Copy, Debug)]
pub struct Runner<'t, S: State> {
    table: &'t TransitionTable<S>,
}

impl<'t, S: State> Runner<'t, S> {
    pub fn new(table: &'t TransitionTable<S>) -> Self {
        Self { table }
    }

    /// Run from `start` over `tokens` and return the state reached.
    ///
    /// Tokens without a matching rule are skipped; if none match the start
    /// state comes back unchanged.
    pub fn run<I, T>(&self, start: &S, tokens: I) -> Result<S, RunError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.trace(start, tokens).map(|run| run.final_state)
    }

    /// Run from the table's initial state.
    pub fn run_from_initial<I, T>(&self, tokens: I) -> Result<S, RunError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.run(self.table.initial(), tokens)
    }

    /// Run from `start` and keep the stacks and step history.
    pub fn trace<I, T>(&self, start: &S, tokens: I) -> Result<Run<S>, RunError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut current = start.clone();
        let mut stacks = Stacks::new(self.table.alphabet());
        let mut history = RunHistory::new();

        for token in tokens {
            let word = token.as_ref();
            let Some(transition) = self.table.lookup(&current, word) else {
                tracing::trace!("No transition from {} on '{}'", current.name(), word);
                continue;
            };

            for op in &transition.operations {
                stacks.apply(op, word).map_err(|source| RunError::Stack {
                    from: current.name().to_string(),
                    word: word.to_string(),
                    source,
                })?;
                tracing::trace!(
                    "State: {}, {:?} '{}', stack depth={}",
                    transition.to.name(),
                    op.kind,
                    op.symbol,
                    stacks.depth()
                );
            }

            tracing::debug!(
                "Transition {} -> {} on '{}'",
                current.name(),
                transition.to.name(),
                word
            );
            history.record(StepRecord {
                from: current,
                to: transition.to.clone(),
                word: word.to_string(),
                timestamp: Utc::now(),
            });
            current = transition.to.clone();
        }

        Ok(Run {
            final_state: current,
            stacks,
            history,
        })
    }
}
