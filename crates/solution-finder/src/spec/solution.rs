use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recommendation card shown once every question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Solution {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub tools: Vec<String>,
    pub implementation: String,
}

impl Solution {
    /// Names of the fields that are empty, or that hold an empty entry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.benefits.is_empty() || self.benefits.iter().any(|b| b.trim().is_empty()) {
            missing.push("benefits");
        }
        if self.tools.is_empty() || self.tools.iter().any(|t| t.trim().is_empty()) {
            missing.push("tools");
        }
        if self.implementation.trim().is_empty() {
            missing.push("implementation");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Solution table row: the full answer sequence that selects `solution`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SolutionEntry {
    pub answers: Vec<String>,
    pub solution: Solution,
}
