//! Sample sentences for trying out the classifier.

use mood_notebook_types::json::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Scene {
    pub title: String,
    pub text: String,
}

/// The built-in scenes, in display order. Callers cycle through them the
/// same way the quiz deck wraps.
pub fn default_scenes() -> Vec<Scene> {
    vec![
        Scene {
            title: "Alex got a happy message!".to_string(),
            text: "You are awesome, Alex! I love your drawing :)".to_string(),
        },
        Scene {
            title: "Alex got a sad message".to_string(),
            text: "I feel lonely today.".to_string(),
        },
        Scene {
            title: "A plain message".to_string(),
            text: "I have 2 pencils.".to_string(),
        },
    ]
}
