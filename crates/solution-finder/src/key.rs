use std::fmt;

use serde::Serialize;

/// Separator placed between answer values.
pub const SEPARATOR: char = '_';
const ESCAPE: char = '\\';

/// Ordered join of answer values.
///
/// Used both as the path key that picks a branch of keyed options and as the
/// composite key that picks a solution. Values are escaped before joining, so
/// `["a_b", "c"]` and `["a", "b_c"]` produce different keys. Values without
/// `_` or `\` join verbatim: `healthcare_diagnosis_efficiency_ready`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerKey(String);

impl AnswerKey {
    pub fn join<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (idx, value) in values.into_iter().enumerate() {
            if idx > 0 {
                key.push(SEPARATOR);
            }
            escape_into(&mut key, value.as_ref());
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        if ch == SEPARATOR || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AnswerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_join_with_separator() {
        let key = AnswerKey::join(["healthcare", "diagnosis", "efficiency", "ready"]);
        assert_eq!(key.as_str(), "healthcare_diagnosis_efficiency_ready");
    }

    #[test]
    fn empty_sequence_gives_empty_key() {
        let key = AnswerKey::join(Vec::<String>::new());
        assert!(key.is_empty());
    }

    #[test]
    fn separator_inside_values_does_not_collide() {
        let left = AnswerKey::join(["a_b", "c"]);
        let right = AnswerKey::join(["a", "b_c"]);
        assert_ne!(left, right);
        assert_eq!(left.as_str(), "a\\_b_c");
        assert_eq!(right.as_str(), "a_b\\_c");
    }

    #[test]
    fn escape_character_is_escaped_too() {
        let left = AnswerKey::join(["a\\", "b"]);
        let right = AnswerKey::join(["a\\_b"]);
        assert_ne!(left, right);
    }
}
