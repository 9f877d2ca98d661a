use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::frontend::{NullPresenter, Presenter};
use crate::progress::Progress;
use crate::render::{QuestionView, ResultView, build_question_view, build_result_view};
use crate::session::{QuizSession, QuizState, Transition};
use crate::spec::solution::Solution;

/// Presenter-facing quiz engine.
///
/// Owns one catalog, one session and one presenter. Every operation that
/// changes the session re-renders through the presenter before returning;
/// no-op requests render nothing.
#[derive(Debug, Clone)]
pub struct QuizEngine<P = NullPresenter> {
    catalog: Catalog,
    session: QuizSession,
    presenter: P,
}

impl QuizEngine<NullPresenter> {
    pub fn headless(catalog: Catalog) -> Self {
        Self::new(catalog, NullPresenter)
    }
}

impl<P: Presenter> QuizEngine<P> {
    /// Starts a session at the first question and renders it.
    pub fn new(catalog: Catalog, presenter: P) -> Self {
        let mut engine = Self {
            catalog,
            session: QuizSession::new(),
            presenter,
        };
        engine.present();
        engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    pub fn current_question(&self) -> Result<QuestionView, QuizError> {
        build_question_view(self.catalog.bank(), &self.session)
    }

    /// The recommendation; only available in the result state.
    pub fn result(&self) -> Result<&Solution, QuizError> {
        if !self.session.is_complete() {
            return Err(QuizError::NotComplete);
        }
        Ok(self
            .catalog
            .solutions()
            .resolve(self.session.answers().as_slice()))
    }

    pub fn result_view(&self) -> Result<ResultView, QuizError> {
        build_result_view(self.catalog.solutions(), &self.session)
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.session.current_index(), self.catalog.bank().len())
    }

    pub fn is_first_question(&self) -> bool {
        !self.session.is_complete() && self.session.current_index() == 0
    }

    pub fn is_last_question(&self) -> bool {
        !self.session.is_complete() && self.session.current_index() + 1 == self.catalog.bank().len()
    }

    pub fn can_advance(&self) -> bool {
        self.session.can_advance()
    }

    pub fn select(&mut self, value: &str) -> Result<(), QuizError> {
        self.session.select(self.catalog.bank(), value)?;
        self.present();
        Ok(())
    }

    pub fn advance(&mut self) -> Result<Transition, QuizError> {
        let transition = self.session.advance(self.catalog.bank())?;
        if transition != Transition::Stayed {
            self.present();
        }
        Ok(transition)
    }

    pub fn retreat(&mut self) -> Result<Transition, QuizError> {
        let transition = self.session.retreat()?;
        if transition != Transition::Stayed {
            self.present();
        }
        Ok(transition)
    }

    /// Drops all answers and returns to the first question.
    pub fn restart(&mut self) {
        self.session.restart();
        self.present();
    }

    fn present(&mut self) {
        if self.session.is_complete() {
            if let Ok(view) = build_result_view(self.catalog.solutions(), &self.session) {
                self.presenter.present_result(&view);
            }
        } else if let Ok(view) = build_question_view(self.catalog.bank(), &self.session) {
            self.presenter.present_question(&view);
        }
    }
}
