use serde::Serialize;
use tracing::debug;

use crate::answers::AnswerPath;
use crate::bank::QuestionBank;
use crate::error::QuizError;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum QuizState {
    Question(usize),
    Result,
}

/// Observable effect of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Stayed,
    Moved { from: usize, to: usize },
    Completed,
}

/// In-memory state of one run through the question bank.
///
/// Mutation only happens through the methods below; the bank is passed in so
/// several sessions can share one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    current_index: usize,
    answers: AnswerPath,
    completed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Result
        } else {
            QuizState::Question(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerPath {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    fn question_index(&self) -> Result<usize, QuizError> {
        if self.completed {
            return Err(QuizError::NoCurrentQuestion);
        }
        Ok(self.current_index)
    }

    /// Value recorded for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        if self.completed {
            return None;
        }
        self.answers.get(self.current_index)
    }

    pub fn can_advance(&self) -> bool {
        !self.completed && self.answers.is_set(self.current_index)
    }

    /// Records `value` for the current question.
    ///
    /// `value` must be one of the options the bank offers for the current
    /// answer prefix.
    pub fn select(&mut self, bank: &QuestionBank, value: &str) -> Result<(), QuizError> {
        let index = self.question_index()?;
        let options = bank.options_for(index, self.answers.prefix(index))?;
        if !options.iter().any(|option| option.value == value) {
            return Err(QuizError::UnknownOption {
                index,
                value: value.to_string(),
            });
        }
        self.answers.set(index, value)?;
        debug!(question = index, value, "option selected");
        Ok(())
    }

    pub fn advance(&mut self, bank: &QuestionBank) -> Result<Transition, QuizError> {
        let index = self.question_index()?;
        bank.question(index)?;
        if !self.answers.is_set(index) {
            return Ok(Transition::Stayed);
        }
        if index + 1 == bank.len() {
            self.completed = true;
            debug!(question = index, key = %self.answers.key(), "quiz completed");
            return Ok(Transition::Completed);
        }
        self.current_index = index + 1;
        debug!(from = index, to = self.current_index, "advanced");
        Ok(Transition::Moved {
            from: index,
            to: self.current_index,
        })
    }

    /// Steps back one question, keeping every recorded answer.
    pub fn retreat(&mut self) -> Result<Transition, QuizError> {
        let index = self.question_index()?;
        if index == 0 {
            return Ok(Transition::Stayed);
        }
        self.current_index = index - 1;
        debug!(from = index, to = self.current_index, "retreated");
        Ok(Transition::Moved {
            from: index,
            to: self.current_index,
        })
    }

    pub fn restart(&mut self) {
        *self = Self::new();
        debug!("session restarted");
    }
}
