pub mod catalog;
pub mod question;
pub mod solution;

pub use catalog::CatalogSpec;
pub use question::{AnswerOption, OptionBranch, OptionSpec, QuestionSpec};
pub use solution::{Solution, SolutionEntry};
