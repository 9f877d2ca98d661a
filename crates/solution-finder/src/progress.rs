use serde::Serialize;

/// Display-only progress counters for the question at `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// One-based position of the current question.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// `(index + 1) / total`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position() as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Step markers: step `k` is active once the user reached question `k`.
    pub fn steps(&self) -> Vec<bool> {
        (0..self.total).map(|step| step <= self.index).collect()
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.position(), self.total)
    }
}

/// Label of the forward navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceLabel {
    Next,
    FindSolution,
}

impl AdvanceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvanceLabel::Next => "Next Query",
            AdvanceLabel::FindSolution => "Find Solution",
        }
    }
}

/// Enablement of the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub can_retreat: bool,
    pub can_advance: bool,
    pub advance_label: AdvanceLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_counts_current_question() {
        let progress = Progress::new(0, 4);
        assert_eq!(progress.fraction(), 0.25);
        assert_eq!(Progress::new(3, 4).percent(), 100.0);
    }

    #[test]
    fn steps_activate_up_to_current() {
        assert_eq!(Progress::new(1, 4).steps(), vec![true, true, false, false]);
        assert_eq!(Progress::new(1, 4).counter(), "2 / 4");
    }
}
