use solution_finder::{
    AdvanceLabel, Catalog, QuizEngine, QuizError, QuizState, TextPresenter, Transition,
};

fn engine() -> QuizEngine {
    QuizEngine::headless(Catalog::builtin().expect("builtin catalog"))
}

fn answer_all(engine: &mut QuizEngine, answers: &[&str]) {
    for value in answers {
        engine.select(value).expect("offered option");
        engine.advance().expect("advance");
    }
}

#[test]
fn starts_at_first_question_with_flat_options() {
    let engine = engine();
    assert_eq!(engine.state(), QuizState::Question(0));
    assert!(engine.is_first_question());
    assert!(!engine.is_last_question());
    assert!(!engine.can_advance());

    let view = engine.current_question().expect("question");
    assert_eq!(view.prompt, "Select your problem domain");
    assert_eq!(view.index, 0);
    assert_eq!(view.total, 4);
    let values: Vec<_> = view.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["healthcare", "education", "environment", "business"]);
    assert_eq!(view.options[0].icon.as_deref(), Some("fas fa-heartbeat"));
    assert!(view.selected.is_none());
}

#[test]
fn advance_without_answer_is_a_no_op() {
    let mut engine = engine();
    let before = engine.session().clone();
    assert_eq!(engine.advance(), Ok(Transition::Stayed));
    assert_eq!(engine.session(), &before);
    assert_eq!(engine.current_question().unwrap().index, 0);
}

#[test]
fn second_question_follows_first_answer() {
    let mut engine = engine();
    engine.select("environment").unwrap();
    assert!(engine.can_advance());
    assert_eq!(
        engine.advance(),
        Ok(Transition::Moved { from: 0, to: 1 })
    );

    let view = engine.current_question().unwrap();
    assert_eq!(view.prompt, "What specific challenge are you facing?");
    let values: Vec<_> = view.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["climate", "pollution", "resources"]);
    assert!(!view.navigation.can_advance);
    assert!(view.navigation.can_retreat);
}

#[test]
fn retreat_then_advance_restores_selection() {
    let mut engine = engine();
    answer_all(&mut engine, &["healthcare"]);
    engine.select("treatment").unwrap();
    let before = engine.current_question().unwrap();

    assert_eq!(engine.retreat(), Ok(Transition::Moved { from: 1, to: 0 }));
    let back = engine.current_question().unwrap();
    assert_eq!(back.selected.as_deref(), Some("healthcare"));
    assert!(back.options[0].selected);
    assert!(back.navigation.can_advance);

    engine.advance().unwrap();
    let again = engine.current_question().unwrap();
    assert_eq!(again, before);
    assert_eq!(
        again.selected_option().map(|o| o.value.as_str()),
        Some("treatment")
    );
}

#[test]
fn retreat_on_first_question_is_a_no_op() {
    let mut engine = engine();
    assert_eq!(engine.retreat(), Ok(Transition::Stayed));
    assert_eq!(engine.state(), QuizState::Question(0));
}

#[test]
fn changing_an_earlier_answer_drops_later_ones() {
    let mut engine = engine();
    answer_all(&mut engine, &["healthcare", "diagnosis"]);
    engine.retreat().unwrap();
    engine.retreat().unwrap();

    engine.select("business").unwrap();
    assert_eq!(engine.session().answers().as_slice(), ["business"]);
    engine.advance().unwrap();

    let view = engine.current_question().unwrap();
    assert!(view.selected.is_none());
    assert!(!engine.can_advance());
    assert_eq!(view.options[0].value, "automation");
}

#[test]
fn reselecting_same_answer_keeps_later_ones() {
    let mut engine = engine();
    answer_all(&mut engine, &["healthcare", "diagnosis"]);
    engine.retreat().unwrap();
    engine.retreat().unwrap();
    engine.select("healthcare").unwrap();
    assert_eq!(
        engine.session().answers().as_slice(),
        ["healthcare", "diagnosis"]
    );
}

#[test]
fn last_question_switches_advance_label() {
    let mut engine = engine();
    answer_all(&mut engine, &["education", "skills", "scale"]);
    assert!(engine.is_last_question());
    let view = engine.current_question().unwrap();
    assert_eq!(view.navigation.advance_label, AdvanceLabel::FindSolution);
    assert_eq!(view.navigation.advance_label.as_str(), "Find Solution");
    assert_eq!(engine.progress().fraction(), 1.0);
}

#[test]
fn exact_answer_path_resolves_medical_imaging() {
    let mut engine = engine();
    answer_all(&mut engine, &["healthcare", "diagnosis", "efficiency", "ready"]);
    assert_eq!(engine.state(), QuizState::Result);

    let view = engine.result_view().unwrap();
    assert_eq!(view.key.as_str(), "healthcare_diagnosis_efficiency_ready");
    assert!(view.exact);

    let solution = engine.result().unwrap();
    assert_eq!(solution.title, "AI Medical Imaging Diagnosis");
    assert_eq!(solution.benefits.len(), 3);
    assert_eq!(solution.tools.len(), 3);
}

#[test]
fn unmatched_answer_path_resolves_fallback() {
    let mut engine = engine();
    answer_all(&mut engine, &["business", "automation", "cost", "hybrid"]);
    let solution = engine.result().unwrap();
    assert_eq!(solution.title, "AI-Powered Solution Framework");
    assert!(solution.is_complete());
    assert!(!engine.result_view().unwrap().exact);
}

#[test]
fn result_is_unavailable_before_completion() {
    let mut engine = engine();
    answer_all(&mut engine, &["business", "automation", "cost"]);
    assert_eq!(engine.result(), Err(QuizError::NotComplete));
}

#[test]
fn navigation_in_result_state_is_rejected() {
    let mut engine = engine();
    answer_all(&mut engine, &["business", "automation", "cost", "hybrid"]);
    assert_eq!(engine.advance(), Err(QuizError::NoCurrentQuestion));
    assert_eq!(engine.retreat(), Err(QuizError::NoCurrentQuestion));
    assert_eq!(engine.select("ready"), Err(QuizError::NoCurrentQuestion));
    assert_eq!(
        engine.current_question().unwrap_err(),
        QuizError::NoCurrentQuestion
    );
    assert!(!engine.is_first_question());
    assert!(!engine.is_last_question());
}

#[test]
fn restart_from_result_clears_everything() {
    let mut engine = engine();
    answer_all(&mut engine, &["healthcare", "diagnosis", "efficiency", "ready"]);
    engine.restart();

    assert_eq!(engine.state(), QuizState::Question(0));
    assert!(engine.session().answers().is_empty());
    let view = engine.current_question().unwrap();
    assert_eq!(view.options.len(), 4);
    assert!(view.options.iter().all(|option| !option.selected));
    assert!(!view.navigation.can_advance);
}

#[test]
fn selecting_an_unknown_value_is_rejected() {
    let mut engine = engine();
    let err = engine.select("diagnosis").unwrap_err();
    assert_eq!(
        err,
        QuizError::UnknownOption {
            index: 0,
            value: "diagnosis".into()
        }
    );
    assert!(engine.session().answers().is_empty());
}

#[test]
fn presenter_renders_after_each_state_change() {
    let catalog = Catalog::builtin().unwrap();
    let mut engine = QuizEngine::new(catalog, TextPresenter::new());
    assert_eq!(engine.presenter().frames().len(), 1);

    engine.advance().unwrap();
    assert_eq!(engine.presenter().frames().len(), 1);

    engine.select("healthcare").unwrap();
    assert_eq!(engine.presenter().frames().len(), 2);
    assert!(
        engine
            .presenter()
            .last_frame()
            .unwrap()
            .contains("* 1. 🏥 Healthcare & Medicine")
    );

    engine.advance().unwrap();
    engine.retreat().unwrap();
    engine.restart();
    assert_eq!(engine.presenter().frames().len(), 5);
}

#[test]
fn presenter_receives_the_result() {
    let catalog = Catalog::builtin().unwrap();
    let mut presenter = TextPresenter::new();
    {
        let mut engine = QuizEngine::new(catalog, &mut presenter);
        for value in ["healthcare", "diagnosis", "efficiency", "ready"] {
            engine.select(value).unwrap();
            engine.advance().unwrap();
        }
    }
    let last = presenter.last_frame().unwrap();
    assert!(last.starts_with("Recommended solution: AI Medical Imaging Diagnosis"));
    assert!(last.contains(" - 24/7 availability"));
}
