use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::QuestionSpec;
use crate::spec::solution::{Solution, SolutionEntry};

/// Top-level catalog definition: question bank plus solution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    pub questions: Vec<QuestionSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<SolutionEntry>,
    pub fallback: Solution,
}
