use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{Value, json};

use crate::bank::QuestionBank;
use crate::error::{QuizError, RenderError};
use crate::key::AnswerKey;
use crate::progress::{AdvanceLabel, Navigation, Progress};
use crate::resolver::SolutionTable;
use crate::session::QuizSession;
use crate::spec::solution::Solution;

/// One option as a presenter shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub selected: bool,
}

/// Everything a presenter needs to draw the current question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub index: usize,
    pub total: usize,
    pub options: Vec<OptionView>,
    pub selected: Option<String>,
    pub progress: Progress,
    pub navigation: Navigation,
}

impl QuestionView {
    pub fn selected_option(&self) -> Option<&OptionView> {
        self.options.iter().find(|option| option.selected)
    }
}

/// Resolved recommendation for a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub key: AnswerKey,
    pub exact: bool,
    pub answers: Vec<String>,
    pub solution: Solution,
}

/// Builds the view of the session's current question.
///
/// Options are re-derived from the bank on every call, and the highlight is
/// taken from the recorded answer, so returning to a question shows the
/// earlier choice.
pub fn build_question_view(
    bank: &QuestionBank,
    session: &QuizSession,
) -> Result<QuestionView, QuizError> {
    if session.is_complete() {
        return Err(QuizError::NoCurrentQuestion);
    }
    let index = session.current_index();
    let question = bank.question(index)?;
    let options = bank.options_for(index, session.answers().prefix(index))?;
    let selected = session.selected().map(str::to_string);

    let options = options
        .iter()
        .map(|option| OptionView {
            label: option.label.clone(),
            value: option.value.clone(),
            icon: option.icon.clone(),
            selected: selected.as_deref() == Some(option.value.as_str()),
        })
        .collect();

    let total = bank.len();
    Ok(QuestionView {
        id: question.id.clone(),
        prompt: question.prompt.clone(),
        index,
        total,
        options,
        selected,
        progress: Progress::new(index, total),
        navigation: Navigation {
            can_retreat: index > 0,
            can_advance: session.can_advance(),
            advance_label: if index + 1 == total {
                AdvanceLabel::FindSolution
            } else {
                AdvanceLabel::Next
            },
        },
    })
}

/// Builds the result view; only valid once the session completed.
pub fn build_result_view(
    solutions: &SolutionTable,
    session: &QuizSession,
) -> Result<ResultView, QuizError> {
    if !session.is_complete() {
        return Err(QuizError::NotComplete);
    }
    let answers = session.answers().as_slice();
    let resolution = solutions.lookup(answers);
    Ok(ResultView {
        key: AnswerKey::join(answers),
        exact: resolution.exact,
        answers: answers.to_vec(),
        solution: resolution.solution.clone(),
    })
}

/// Render the question as human-friendly text.
pub fn render_text(view: &QuestionView) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Question {}: {}",
        view.progress.counter(),
        view.prompt
    ));
    for (position, option) in view.options.iter().enumerate() {
        let marker = if option.selected { "*" } else { " " };
        lines.push(format!(
            " {marker} {}. {} ({})",
            position + 1,
            option.label,
            option.value
        ));
    }

    let mut controls = Vec::new();
    if view.navigation.can_retreat {
        controls.push("[Previous]".to_string());
    }
    if view.navigation.can_advance {
        controls.push(format!("[{}]", view.navigation.advance_label.as_str()));
    }
    if !controls.is_empty() {
        lines.push(controls.join(" "));
    }

    lines.join("\n")
}

/// Render the question as a structured JSON-friendly value.
pub fn render_json_ui(view: &QuestionView) -> Value {
    let options = view
        .options
        .iter()
        .map(|option| {
            let mut entry = json!({
                "label": option.label,
                "value": option.value,
                "selected": option.selected,
            });
            if let Some(icon) = &option.icon {
                entry["icon"] = Value::String(icon.clone());
            }
            entry
        })
        .collect::<Vec<_>>();

    json!({
        "status": "need_input",
        "question_id": view.id,
        "prompt": view.prompt,
        "index": view.index,
        "total": view.total,
        "options": options,
        "selected": view.selected,
        "progress": {
            "position": view.progress.position(),
            "total": view.progress.total,
            "percent": view.progress.percent(),
            "steps": view.progress.steps(),
        },
        "navigation": {
            "can_retreat": view.navigation.can_retreat,
            "can_advance": view.navigation.can_advance,
            "advance_label": view.navigation.advance_label.as_str(),
        },
    })
}

/// Render the question as an Adaptive Card v1.3 transport.
///
/// Each option becomes a submit action carrying `{"quiz": {"select": value}}`;
/// navigation actions carry `"advance"` or `"retreat"`.
pub fn render_card(view: &QuestionView) -> Value {
    let mut body = vec![
        json!({
            "type": "TextBlock",
            "text": view.prompt,
            "weight": "Bolder",
            "size": "Large",
            "wrap": true,
        }),
        json!({
            "type": "TextBlock",
            "text": format!("Question {}", view.progress.counter()),
            "isSubtle": true,
            "spacing": "None",
        }),
    ];

    if let Some(option) = view.selected_option() {
        body.push(json!({
            "type": "TextBlock",
            "text": format!("Selected: {}", option.label),
            "wrap": true,
        }));
    }

    let mut actions = view
        .options
        .iter()
        .map(|option| {
            let style = if option.selected { "positive" } else { "default" };
            json!({
                "type": "Action.Submit",
                "title": option.label,
                "style": style,
                "data": { "quiz": { "select": option.value } },
            })
        })
        .collect::<Vec<_>>();

    if view.navigation.can_retreat {
        actions.push(json!({
            "type": "Action.Submit",
            "title": "Previous",
            "data": { "quiz": { "navigate": "retreat" } },
        }));
    }
    if view.navigation.can_advance {
        actions.push(json!({
            "type": "Action.Submit",
            "title": view.navigation.advance_label.as_str(),
            "data": { "quiz": { "navigate": "advance" } },
        }));
    }

    json!({
        "type": "AdaptiveCard",
        "version": "1.3",
        "body": body,
        "actions": actions,
    })
}

/// Render the recommendation as human-friendly text.
pub fn render_result_text(view: &ResultView) -> String {
    let solution = &view.solution;
    let mut lines = vec![
        format!("Recommended solution: {}", solution.title),
        solution.description.clone(),
        "Key features:".to_string(),
    ];
    lines.extend(solution.benefits.iter().map(|benefit| format!(" - {benefit}")));
    lines.push(format!("Tools & technologies: {}", solution.tools.join(", ")));
    lines.push(format!("Implementation: {}", solution.implementation));
    lines.join("\n")
}

/// Render the recommendation as a structured JSON-friendly value.
pub fn render_result_json(view: &ResultView) -> Value {
    json!({
        "status": "complete",
        "key": view.key,
        "exact": view.exact,
        "answers": view.answers,
        "solution": view.solution,
    })
}

const RESULT_TEMPLATE: &str = r#"<div class="solution-result">
    <h4>{{solution.title}}</h4>
    <p>{{solution.description}}</p>
    <div class="solution-features">
        <h5>Key Features:</h5>
        <ul>
            {{#each solution.benefits}}<li>{{this}}</li>{{/each}}
        </ul>
    </div>
    <div class="solution-tools">
        <h5>Tools &amp; Technologies:</h5>
        <div class="tools-list">
            {{#each solution.tools}}<span>{{this}}</span>{{/each}}
        </div>
    </div>
    <div class="implementation">
        <h5>Implementation:</h5>
        <p>{{solution.implementation}}</p>
    </div>
</div>"#;

/// Render the recommendation card markup. Field values are HTML-escaped.
pub fn render_result_html(view: &ResultView) -> Result<String, RenderError> {
    let mut engine = Handlebars::new();
    engine.set_strict_mode(true);
    Ok(engine.render_template(RESULT_TEMPLATE, view)?)
}
