use crate::{error::ApiError, state::AppState};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use mood_notebook::quiz::{FEEDBACK_DELAY, QuizQuestion, QuizState};
use mood_notebook::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_deck))
        .route("/answer", post(answer))
}

/// The caller owns the quiz state and sends it back with every answer; the
/// server only applies the pure transitions.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizAnswerRequest {
    #[serde(default)]
    pub state: QuizState,
    pub choice: Sentiment,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizAnswerResponse {
    pub correct: bool,
    pub feedback: String,
    /// Settled next state: feedback cleared, index advanced with wraparound.
    pub state: QuizState,
    /// How long the caller should keep the feedback on screen.
    pub feedback_ms: u64,
}

#[utoipa::path(
    get,
    path = "/quiz",
    tag = "quiz",
    responses(
        (status = 200, description = "The quiz deck, in play order", body = Vec<QuizQuestion>)
    )
)]
#[tracing::instrument(name = "GET /quiz", skip(state))]
pub async fn get_deck(State(state): State<AppState>) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    Ok(Json(state.deck.clone()))
}

#[utoipa::path(
    post,
    path = "/quiz/answer",
    tag = "quiz",
    request_body = QuizAnswerRequest,
    responses(
        (status = 200, description = "Judgement, feedback and the settled next state", body = QuizAnswerResponse)
    )
)]
#[tracing::instrument(name = "POST /quiz/answer", skip(state, payload))]
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<QuizAnswerRequest>,
) -> Result<Json<QuizAnswerResponse>, ApiError> {
    let outcome = payload.state.answer(&state.deck, payload.choice);
    let settled = outcome.state.settle(&state.deck);
    Ok(Json(QuizAnswerResponse {
        correct: outcome.correct,
        feedback: outcome.feedback,
        state: settled,
        feedback_ms: FEEDBACK_DELAY.as_millis() as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{construct_router, state::State};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use mood_notebook_inference::InferenceConfig;
    use mood_notebook_types::Value;
    use mood_notebook_types::json::json;
    use mood_notebook_types::tokio;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        construct_router(Arc::new(State::new(InferenceConfig::default())))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn post_answer(router: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/quiz/answer")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(router, request).await
    }

    #[tokio::test]
    async fn test_deck_lists_all_questions_in_order() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/quiz")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        let deck = body.as_array().unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck[0]["prompt"], "I love playing with my friends.");
        assert_eq!(deck[0]["expected"], "Happy");
    }

    #[tokio::test]
    async fn test_correct_answer_scores_and_advances() {
        let (status, body) = post_answer(test_router(), json!({"choice": "Happy"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["correct"], true);
        assert_eq!(body["feedback"], "Correct!");
        assert_eq!(body["state"]["score"], 1);
        assert_eq!(body["state"]["current_index"], 1);
        assert_eq!(body["state"]["last_feedback"], Value::Null);
        assert_eq!(body["feedback_ms"], 900);
    }

    #[tokio::test]
    async fn test_incorrect_answer_still_advances() {
        let (status, body) = post_answer(test_router(), json!({"choice": "Sad"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["correct"], false);
        assert_eq!(body["feedback"], "Oops! Correct: Happy");
        assert_eq!(body["state"]["score"], 0);
        assert_eq!(body["state"]["current_index"], 1);
    }

    #[tokio::test]
    async fn test_last_question_wraps_around() {
        let (status, body) = post_answer(
            test_router(),
            json!({
                "state": {"current_index": 2, "score": 2},
                "choice": "Neutral"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["correct"], true);
        assert_eq!(body["state"]["score"], 3);
        assert_eq!(body["state"]["current_index"], 0);
    }
}
