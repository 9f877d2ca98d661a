use thiserror::Error;

/// Precondition violations raised by the quiz engine.
///
/// Ordinary interaction with offered options never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question index {index} is out of range (bank has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },
    #[error("no current question: the quiz is showing its result")]
    NoCurrentQuestion,
    #[error("result requested before the last question was answered")]
    NotComplete,
    #[error("'{value}' is not an option of question {index}")]
    UnknownOption { index: usize, value: String },
    #[error("cannot answer question {index} while only {answered} answers are recorded")]
    AnswerGap { index: usize, answered: usize },
    #[error("expected {expected} answers, got {actual}")]
    IncompleteAnswers { expected: usize, actual: usize },
    #[error("answer provider stopped at question {index}")]
    ProviderStopped { index: usize },
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no questions")]
    NoQuestions,
    #[error("question '{question}' has an empty prompt")]
    EmptyPrompt { question: String },
    #[error("duplicate question id '{question}'")]
    DuplicateQuestion { question: String },
    #[error("first question '{question}' cannot key its options on prior answers")]
    KeyedFirstQuestion { question: String },
    #[error("question '{question}' has keyed options without any branch")]
    NoBranches { question: String },
    #[error("question '{question}' has an empty option list{}", branch_suffix(.branch))]
    EmptyOptions {
        question: String,
        branch: Option<String>,
    },
    #[error("question '{question}' repeats option value '{value}'")]
    DuplicateOption { question: String, value: String },
    #[error("question '{question}' has a branch path of {len} answers; expected at most {max}")]
    BranchPathTooLong {
        question: String,
        len: usize,
        max: usize,
    },
    #[error("question '{question}' declares branch '{key}' twice")]
    DuplicateBranch { question: String, key: String },
    #[error("solution '{key}' has {len} answers; the bank has {expected} questions")]
    SolutionPathLength {
        key: String,
        len: usize,
        expected: usize,
    },
    #[error("solution '{key}' is declared twice")]
    DuplicateSolution { key: String },
    #[error("solution '{key}' is missing: {}", .fields.join(", "))]
    IncompleteSolution {
        key: String,
        fields: Vec<&'static str>,
    },
    #[error("fallback solution is missing: {}", .fields.join(", "))]
    IncompleteFallback { fields: Vec<&'static str> },
}

fn branch_suffix(branch: &Option<String>) -> String {
    branch
        .as_ref()
        .map(|key| format!(" in branch '{key}'"))
        .unwrap_or_default()
}

/// Errors raised by template-based renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),
}
