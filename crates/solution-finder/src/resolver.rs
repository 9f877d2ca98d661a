use std::collections::BTreeMap;

use tracing::debug;

use crate::key::AnswerKey;
use crate::spec::solution::{Solution, SolutionEntry};

/// Outcome of a solution lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub solution: &'a Solution,
    pub exact: bool,
}

/// Static mapping from composite key to solution, plus the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionTable {
    entries: BTreeMap<AnswerKey, Solution>,
    fallback: Solution,
}

impl SolutionTable {
    pub(crate) fn from_validated(entries: &[SolutionEntry], fallback: &Solution) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|entry| (AnswerKey::join(&entry.answers), entry.solution.clone()))
                .collect(),
            fallback: fallback.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fallback(&self) -> &Solution {
        &self.fallback
    }

    pub fn get(&self, key: &AnswerKey) -> Option<&Solution> {
        self.entries.get(key)
    }

    pub fn resolve<S: AsRef<str>>(&self, answers: &[S]) -> &Solution {
        self.lookup(answers).solution
    }

    pub fn lookup<S: AsRef<str>>(&self, answers: &[S]) -> Resolution<'_> {
        let key = AnswerKey::join(answers);
        match self.entries.get(&key) {
            Some(solution) => Resolution {
                solution,
                exact: true,
            },
            None => {
                debug!(key = %key, "no solution for composite key; using fallback");
                Resolution {
                    solution: &self.fallback,
                    exact: false,
                }
            }
        }
    }
}
