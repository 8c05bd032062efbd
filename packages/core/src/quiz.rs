//! Quiz engine: a fixed deck of prompts and pure state transitions.
//!
//! The quiz is modeled as explicit state passed through update functions
//! that return a new state, instead of a mutable widget. Callers hold the
//! [`QuizState`], apply [`QuizState::answer`] when the user picks a label,
//! display the feedback for [`FEEDBACK_DELAY`], then adopt the state from
//! [`QuizState::settle`].

use std::time::Duration;

use mood_notebook_types::json::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// How long answer feedback stays visible before the next question comes up.
/// Cooperative: nothing blocks on it, the caller schedules the settle.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(900);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QuizQuestion {
    pub prompt: String,
    pub expected: Sentiment,
}

/// The built-in deck, in play order. Cycled with wraparound after the last
/// entry.
pub fn default_deck() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            prompt: "I love playing with my friends.".to_string(),
            expected: Sentiment::Happy,
        },
        QuizQuestion {
            prompt: "I don't want to go to school today.".to_string(),
            expected: Sentiment::Sad,
        },
        QuizQuestion {
            prompt: "The sun is bright.".to_string(),
            expected: Sentiment::Neutral,
        },
    ]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QuizState {
    #[serde(default)]
    pub current_index: usize,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub last_feedback: Option<String>,
}

/// What a single answer produced: the judgement, the transient feedback
/// line, and the state holding that feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub feedback: String,
    pub state: QuizState,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question the state currently points at, if any.
    pub fn current<'deck>(&self, deck: &'deck [QuizQuestion]) -> Option<&'deck QuizQuestion> {
        deck.get(self.current_index)
    }

    /// Judges `choice` against the current question. A correct answer bumps
    /// the score by exactly one; an incorrect one leaves it untouched. The
    /// index does not move here — that happens in [`Self::settle`] once the
    /// feedback has been shown.
    pub fn answer(&self, deck: &[QuizQuestion], choice: Sentiment) -> AnswerOutcome {
        let Some(question) = self.current(deck) else {
            return AnswerOutcome {
                correct: false,
                feedback: "No question to answer".to_string(),
                state: self.clone(),
            };
        };

        let correct = question.expected == choice;
        let feedback = if correct {
            "Correct!".to_string()
        } else {
            format!("Oops! Correct: {}", question.expected)
        };

        AnswerOutcome {
            correct,
            feedback: feedback.clone(),
            state: QuizState {
                current_index: self.current_index,
                score: if correct { self.score + 1 } else { self.score },
                last_feedback: Some(feedback),
            },
        }
    }

    /// Clears the transient feedback and advances to the next question,
    /// wrapping to the start after the last entry.
    pub fn settle(&self, deck: &[QuizQuestion]) -> QuizState {
        let current_index = if deck.is_empty() {
            0
        } else {
            (self.current_index + 1) % deck.len()
        };
        QuizState {
            current_index,
            score: self.score,
            last_feedback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_bumps_score_and_sets_feedback() {
        let deck = default_deck();
        let state = QuizState::new();
        let outcome = state.answer(&deck, Sentiment::Happy);
        assert!(outcome.correct);
        assert_eq!(outcome.state.score, 1);
        assert_eq!(outcome.state.current_index, 0);
        assert_eq!(outcome.state.last_feedback.as_deref(), Some("Correct!"));
    }

    #[test]
    fn test_incorrect_answer_keeps_score() {
        let deck = default_deck();
        let state = QuizState::new();
        let outcome = state.answer(&deck, Sentiment::Sad);
        assert!(!outcome.correct);
        assert_eq!(outcome.state.score, 0);
        assert_eq!(outcome.feedback, "Oops! Correct: Happy");
    }

    #[test]
    fn test_settle_clears_feedback_and_advances() {
        let deck = default_deck();
        let outcome = QuizState::new().answer(&deck, Sentiment::Happy);
        let settled = outcome.state.settle(&deck);
        assert_eq!(settled.current_index, 1);
        assert_eq!(settled.score, 1);
        assert_eq!(settled.last_feedback, None);
    }

    #[test]
    fn test_settle_wraps_around_after_last_question() {
        let deck = default_deck();
        let state = QuizState {
            current_index: deck.len() - 1,
            score: 2,
            last_feedback: Some("Correct!".to_string()),
        };
        let settled = state.settle(&deck);
        assert_eq!(settled.current_index, 0);
        assert_eq!(settled.score, 2);
    }

    #[test]
    fn test_full_cycle_through_the_deck() {
        let deck = default_deck();
        let mut state = QuizState::new();
        for question in &deck {
            let outcome = state.answer(&deck, question.expected);
            assert!(outcome.correct);
            state = outcome.state.settle(&deck);
        }
        assert_eq!(state.current_index, 0);
        assert_eq!(state.score, deck.len() as u32);
    }

    #[test]
    fn test_answer_out_of_range_index_is_a_noop() {
        let deck = default_deck();
        let state = QuizState {
            current_index: 99,
            score: 3,
            last_feedback: None,
        };
        let outcome = state.answer(&deck, Sentiment::Happy);
        assert!(!outcome.correct);
        assert_eq!(outcome.state, state);
    }

    #[test]
    fn test_feedback_delay_is_sub_second() {
        assert!(FEEDBACK_DELAY < Duration::from_secs(1));
    }
}
