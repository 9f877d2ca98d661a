use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One selectable answer.
///
/// `value` is what gets recorded in the answer path; `label` and `icon` are
/// only used by presenters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Option list used when the prior answers equal `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptionBranch {
    pub path: Vec<String>,
    pub options: Vec<AnswerOption>,
}

/// Where a question takes its options from.
///
/// The first branch of a keyed source is its default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionSpec {
    Flat { options: Vec<AnswerOption> },
    Keyed { branches: Vec<OptionBranch> },
}

/// Definition of a single question inside a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    pub id: String,
    pub prompt: String,
    pub options: OptionSpec,
}
