use std::collections::BTreeSet;

use crate::error::CatalogError;
use crate::key::AnswerKey;
use crate::spec::catalog::CatalogSpec;
use crate::spec::question::{AnswerOption, OptionSpec, QuestionSpec};

/// Checks the structural invariants the engine relies on.
///
/// Returns the first violation found, walking questions in order, then the
/// solution table, then the fallback.
pub fn validate(spec: &CatalogSpec) -> Result<(), CatalogError> {
    if spec.questions.is_empty() {
        return Err(CatalogError::NoQuestions);
    }

    let mut ids = BTreeSet::new();
    for (index, question) in spec.questions.iter().enumerate() {
        if !ids.insert(question.id.as_str()) {
            return Err(CatalogError::DuplicateQuestion {
                question: question.id.clone(),
            });
        }
        if question.prompt.trim().is_empty() {
            return Err(CatalogError::EmptyPrompt {
                question: question.id.clone(),
            });
        }
        validate_options(index, question)?;
    }

    let expected = spec.questions.len();
    let mut keys = BTreeSet::new();
    for entry in &spec.solutions {
        let key = AnswerKey::join(&entry.answers);
        if entry.answers.len() != expected {
            return Err(CatalogError::SolutionPathLength {
                key: key.to_string(),
                len: entry.answers.len(),
                expected,
            });
        }
        let fields = entry.solution.missing_fields();
        if !fields.is_empty() {
            return Err(CatalogError::IncompleteSolution {
                key: key.to_string(),
                fields,
            });
        }
        if !keys.insert(key.clone()) {
            return Err(CatalogError::DuplicateSolution {
                key: key.to_string(),
            });
        }
    }

    let fields = spec.fallback.missing_fields();
    if !fields.is_empty() {
        return Err(CatalogError::IncompleteFallback { fields });
    }

    Ok(())
}

fn validate_options(index: usize, question: &QuestionSpec) -> Result<(), CatalogError> {
    match &question.options {
        OptionSpec::Flat { options } => check_list(question, None, options),
        OptionSpec::Keyed { branches } => {
            if index == 0 {
                return Err(CatalogError::KeyedFirstQuestion {
                    question: question.id.clone(),
                });
            }
            if branches.is_empty() {
                return Err(CatalogError::NoBranches {
                    question: question.id.clone(),
                });
            }
            let mut seen = BTreeSet::new();
            for branch in branches {
                let key = AnswerKey::join(&branch.path);
                if branch.path.len() > index {
                    return Err(CatalogError::BranchPathTooLong {
                        question: question.id.clone(),
                        len: branch.path.len(),
                        max: index,
                    });
                }
                if !seen.insert(key.clone()) {
                    return Err(CatalogError::DuplicateBranch {
                        question: question.id.clone(),
                        key: key.to_string(),
                    });
                }
                check_list(question, Some(&key), &branch.options)?;
            }
            Ok(())
        }
    }
}

fn check_list(
    question: &QuestionSpec,
    branch: Option<&AnswerKey>,
    options: &[AnswerOption],
) -> Result<(), CatalogError> {
    if options.is_empty() {
        return Err(CatalogError::EmptyOptions {
            question: question.id.clone(),
            branch: branch.map(ToString::to_string),
        });
    }
    let mut values = BTreeSet::new();
    for option in options {
        if !values.insert(option.value.as_str()) {
            return Err(CatalogError::DuplicateOption {
                question: question.id.clone(),
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}
