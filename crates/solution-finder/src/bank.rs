use std::collections::BTreeMap;

use tracing::debug;

use crate::error::QuizError;
use crate::key::AnswerKey;
use crate::spec::question::{AnswerOption, OptionSpec, QuestionSpec};

/// Validated option source of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    /// Same options regardless of prior answers.
    Flat(Vec<AnswerOption>),
    /// Options keyed by the path key of prior answers. `default` names the
    /// branch used when neither the full path nor the previous answer match;
    /// it is the first branch declared in the catalog.
    Keyed {
        branches: BTreeMap<AnswerKey, Vec<AnswerOption>>,
        default: AnswerKey,
    },
}

/// Which lookup rule produced an option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMatch {
    Flat,
    Path,
    PreviousAnswer,
    Default,
}

/// Options resolved for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLookup<'a> {
    pub options: &'a [AnswerOption],
    pub matched: BranchMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub source: OptionSource,
}

/// Immutable ordered question sequence.
///
/// Built from validated catalog specs, so every option list it holds is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub(crate) fn from_validated(specs: &[QuestionSpec]) -> Self {
        let questions = specs
            .iter()
            .map(|spec| Question {
                id: spec.id.clone(),
                prompt: spec.prompt.clone(),
                source: match &spec.options {
                    OptionSpec::Flat { options } => OptionSource::Flat(options.clone()),
                    OptionSpec::Keyed { branches } => OptionSource::Keyed {
                        default: branches
                            .first()
                            .map(|branch| AnswerKey::join(&branch.path))
                            .unwrap_or_else(|| AnswerKey::join(Vec::<String>::new())),
                        branches: branches
                            .iter()
                            .map(|branch| (AnswerKey::join(&branch.path), branch.options.clone()))
                            .collect(),
                    },
                },
            })
            .collect();
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::QuestionOutOfRange {
                index,
                total: self.questions.len(),
            })
    }

    /// Options offered at `index` given the answers recorded so far.
    pub fn options_for(
        &self,
        index: usize,
        answers_so_far: &[String],
    ) -> Result<&[AnswerOption], QuizError> {
        self.lookup_options(index, answers_so_far)
            .map(|lookup| lookup.options)
    }

    /// Like [`QuestionBank::options_for`], also reporting which rule matched.
    ///
    /// Keyed sources try, in order: the path key of every answer before
    /// `index`, the single answer right before `index`, and the default
    /// branch. Only answers before `index` are considered.
    pub fn lookup_options(
        &self,
        index: usize,
        answers_so_far: &[String],
    ) -> Result<OptionLookup<'_>, QuizError> {
        let question = self.question(index)?;
        let (branches, default) = match &question.source {
            OptionSource::Flat(options) => {
                return Ok(OptionLookup {
                    options,
                    matched: BranchMatch::Flat,
                });
            }
            OptionSource::Keyed { branches, default } => (branches, default),
        };

        let prior = &answers_so_far[..index.min(answers_so_far.len())];
        let path_key = AnswerKey::join(prior);
        if let Some(options) = branches.get(&path_key) {
            return Ok(OptionLookup {
                options,
                matched: BranchMatch::Path,
            });
        }

        if let Some(previous) = prior.last() {
            let previous_key = AnswerKey::join([previous]);
            if let Some(options) = branches.get(&previous_key) {
                debug!(
                    question = %question.id,
                    key = %path_key,
                    "no branch for path key; using previous answer"
                );
                return Ok(OptionLookup {
                    options,
                    matched: BranchMatch::PreviousAnswer,
                });
            }
        }

        debug!(
            question = %question.id,
            key = %path_key,
            default = %default,
            "no branch for path key; using default branch"
        );
        let options = branches
            .get(default)
            .or_else(|| branches.values().next())
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(OptionLookup {
            options,
            matched: BranchMatch::Default,
        })
    }
}
