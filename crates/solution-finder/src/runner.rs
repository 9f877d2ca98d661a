use crate::catalog::Catalog;
use crate::engine::QuizEngine;
use crate::error::QuizError;
use crate::frontend::Presenter;
use crate::render::{QuestionView, ResultView};
use crate::session::Transition;

/// Picks the value to select for a question. Returning `None` stops the run.
pub type AnswerProvider<'a> = dyn FnMut(&QuestionView) -> Option<String> + 'a;

/// Answers, key and solution of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub result: ResultView,
    pub steps: usize,
}

pub struct QuizRunner;

impl QuizRunner {
    /// Drives `engine` from its current question to the result, asking
    /// `provider` for one value per question.
    pub fn run<P: Presenter>(
        engine: &mut QuizEngine<P>,
        provider: &mut AnswerProvider<'_>,
    ) -> Result<RunOutcome, QuizError> {
        let mut steps = 0;
        loop {
            let view = engine.current_question()?;
            let value = provider(&view).ok_or(QuizError::ProviderStopped { index: view.index })?;
            engine.select(&value)?;
            steps += 1;
            match engine.advance()? {
                Transition::Completed => break,
                Transition::Moved { .. } => {}
                Transition::Stayed => return Err(QuizError::ProviderStopped { index: view.index }),
            }
        }
        Ok(RunOutcome {
            result: engine.result_view()?,
            steps,
        })
    }

    /// Runs a fresh headless session with a fixed answer sequence.
    pub fn run_scripted<S: AsRef<str>>(
        catalog: Catalog,
        answers: &[S],
    ) -> Result<RunOutcome, QuizError> {
        let total = catalog.bank().len();
        if answers.len() != total {
            return Err(QuizError::IncompleteAnswers {
                expected: total,
                actual: answers.len(),
            });
        }
        let mut engine = QuizEngine::headless(catalog);
        let mut script = answers.iter().map(|value| value.as_ref().to_string());
        Self::run(&mut engine, &mut |_view: &QuestionView| script.next())
    }
}
