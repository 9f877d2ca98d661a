use serde_json::Value;

use crate::render::{
    QuestionView, ResultView, render_json_ui, render_result_json, render_result_text, render_text,
};

/// Rendering side of the engine.
///
/// The engine calls exactly one of these after every state change.
pub trait Presenter {
    fn present_question(&mut self, view: &QuestionView);
    fn present_result(&mut self, view: &ResultView);
}

/// Presenter that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present_question(&mut self, _view: &QuestionView) {}

    fn present_result(&mut self, _view: &ResultView) {}
}

/// Collects every rendered frame as text.
#[derive(Debug, Default, Clone)]
pub struct TextPresenter {
    frames: Vec<String>,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Presenter for TextPresenter {
    fn present_question(&mut self, view: &QuestionView) {
        self.frames.push(render_text(view));
    }

    fn present_result(&mut self, view: &ResultView) {
        self.frames.push(render_result_text(view));
    }
}

/// Collects every rendered frame as JSON.
#[derive(Debug, Default, Clone)]
pub struct JsonPresenter {
    frames: Vec<Value>,
}

impl JsonPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Value] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Value> {
        self.frames.last()
    }
}

impl Presenter for JsonPresenter {
    fn present_question(&mut self, view: &QuestionView) {
        self.frames.push(render_json_ui(view));
    }

    fn present_result(&mut self, view: &ResultView) {
        self.frames.push(render_result_json(view));
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present_question(&mut self, view: &QuestionView) {
        (**self).present_question(view);
    }

    fn present_result(&mut self, view: &ResultView) {
        (**self).present_result(view);
    }
}
