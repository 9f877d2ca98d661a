use serde::Serialize;

use crate::error::QuizError;
use crate::key::AnswerKey;

/// Chosen option values, one per answered question, in question order.
///
/// Answers always form a contiguous prefix of the bank: slot `i` exists only
/// once slots `0..i` are filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerPath {
    values: Vec<String>,
}

impl AnswerPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn is_set(&self, index: usize) -> bool {
        index < self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Answers recorded before `index`.
    pub fn prefix(&self, index: usize) -> &[String] {
        &self.values[..index.min(self.values.len())]
    }

    /// Records `value` at `index`.
    ///
    /// Re-selecting the stored value keeps later answers. A different value
    /// drops every answer after `index`, since later option sets and the
    /// composite key depend on this prefix.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), QuizError> {
        let value = value.into();
        match self.values.get(index) {
            Some(current) if *current == value => Ok(()),
            Some(_) => {
                self.values.truncate(index);
                self.values.push(value);
                Ok(())
            }
            None if index == self.values.len() => {
                self.values.push(value);
                Ok(())
            }
            None => Err(QuizError::AnswerGap {
                index,
                answered: self.values.len(),
            }),
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn key(&self) -> AnswerKey {
        AnswerKey::join(&self.values)
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_appends_and_reports_gaps() {
        let mut path = AnswerPath::new();
        path.set(0, "a").unwrap();
        path.set(1, "b").unwrap();
        assert_eq!(path.as_slice(), ["a", "b"]);

        let err = path.set(3, "d").unwrap_err();
        assert_eq!(err, QuizError::AnswerGap { index: 3, answered: 2 });
    }

    #[test]
    fn same_value_keeps_later_answers() {
        let mut path: AnswerPath = ["a", "b", "c"].into_iter().collect();
        path.set(1, "b").unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn different_value_drops_later_answers() {
        let mut path: AnswerPath = ["a", "b", "c"].into_iter().collect();
        path.set(1, "z").unwrap();
        assert_eq!(path.as_slice(), ["a", "z"]);
        assert!(!path.is_set(2));
    }

    #[test]
    fn prefix_is_clamped() {
        let path: AnswerPath = ["a"].into_iter().collect();
        assert!(path.prefix(0).is_empty());
        assert_eq!(path.prefix(4), ["a"]);
    }
}
