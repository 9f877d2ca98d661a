//! Branching questionnaire engine.
//!
//! A [`Catalog`] holds an ordered question bank whose later questions may
//! key their options on earlier answers, and a solution table keyed by the
//! full answer path. A [`QuizEngine`] walks one [`QuizSession`] through the
//! bank and re-renders through a [`Presenter`] after every change.

pub mod answers;
pub mod bank;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod key;
pub mod progress;
pub mod render;
pub mod resolver;
pub mod runner;
pub mod session;
pub mod spec;
pub mod validate;

pub use answers::AnswerPath;
pub use bank::{BranchMatch, OptionLookup, OptionSource, Question, QuestionBank};
pub use catalog::{Catalog, catalog_schema};
pub use engine::QuizEngine;
pub use error::{CatalogError, QuizError, RenderError};
pub use frontend::{JsonPresenter, NullPresenter, Presenter, TextPresenter};
pub use key::{AnswerKey, SEPARATOR};
pub use progress::{AdvanceLabel, Navigation, Progress};
pub use render::{
    OptionView, QuestionView, ResultView, build_question_view, build_result_view, render_card,
    render_json_ui, render_result_html, render_result_json, render_result_text, render_text,
};
pub use resolver::{Resolution, SolutionTable};
pub use runner::{AnswerProvider, QuizRunner, RunOutcome};
pub use session::{QuizSession, QuizState, Transition};
pub use spec::{AnswerOption, CatalogSpec, OptionBranch, OptionSpec, QuestionSpec, Solution};
pub use validate::validate;
