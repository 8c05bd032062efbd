use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mood Notebook API",
        version = "1.0.0",
        description = "Playful sentiment classification service.\n\nText is classified as Happy, Sad or Neutral, either by a local keyword heuristic or by relaying it to a hosted inference model. A small quiz deck with client-owned state rounds out the API.",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sentiment", description = "Raw relay to the hosted inference service"),
        (name = "classify", description = "Heuristic or inference-backed classification"),
        (name = "quiz", description = "Quiz deck and answer judging"),
        (name = "samples", description = "Sample scenes")
    ),
    paths(
        crate::routes::health::health,
        crate::routes::sentiment::proxy_sentiment,
        crate::routes::classify::classify,
        crate::routes::quiz::get_deck,
        crate::routes::quiz::answer,
        crate::routes::samples::get_scenes,
    ),
    components(schemas(
        crate::routes::health::HealthResponse,
        crate::routes::classify::ClassifyMode,
        crate::routes::classify::ClassifyRequest,
        crate::routes::quiz::QuizAnswerRequest,
        crate::routes::quiz::QuizAnswerResponse,
        mood_notebook::sentiment::Sentiment,
        mood_notebook::sentiment::ClassificationResult,
        mood_notebook::quiz::QuizQuestion,
        mood_notebook::quiz::QuizState,
        mood_notebook::samples::Scene,
    ))
)]
pub struct ApiDoc;

#[tracing::instrument(name = "GET /openapi.json")]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
