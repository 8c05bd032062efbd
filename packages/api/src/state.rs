use std::sync::Arc;

use mood_notebook::quiz::{self, QuizQuestion};
use mood_notebook::samples::{self, Scene};
use mood_notebook_inference::{InferenceClient, InferenceConfig};

pub type AppState = Arc<State>;

/// Read-only shared state. Built once at startup; requests never mutate it.
/// The upstream credential is deliberately not part of this — it is looked
/// up from the environment on every proxy call.
pub struct State {
    pub inference: InferenceClient,
    pub deck: Vec<QuizQuestion>,
    pub scenes: Vec<Scene>,
}

impl State {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            inference: InferenceClient::new(config),
            deck: quiz::default_deck(),
            scenes: samples::default_scenes(),
        }
    }
}
