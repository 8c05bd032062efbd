use crate::{error::ApiError, state::AppState};
use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use mood_notebook::sentiment::{self, ClassificationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(classify))
}

/// Which classifier answers the request.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyMode {
    #[default]
    Heuristic,
    Inference,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    pub text: String,
    #[serde(default)]
    pub mode: ClassifyMode,
}

/// Anything that does not deserialize into a request with a `text` field
/// counts as "no text provided"; an empty string still parses and the
/// heuristic classifier answers Neutral for it.
fn parse_request(body: &Bytes) -> Result<ClassifyRequest, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::bad_request("No text provided"))
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Classification result", body = ClassificationResult),
        (status = 400, description = "No text provided"),
        (status = 500, description = "Credential not configured, or the upstream call failed")
    )
)]
#[tracing::instrument(name = "POST /classify", skip(state, body))]
pub async fn classify(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClassificationResult>, ApiError> {
    let request = parse_request(&body)?;

    let result = match request.mode {
        ClassifyMode::Heuristic => sentiment::classify(&request.text),
        ClassifyMode::Inference => {
            // Same contract as the raw proxy: empty text never reaches the
            // upstream service.
            if request.text.is_empty() {
                return Err(ApiError::bad_request("No text provided"));
            }
            let config = state.inference.config();
            let api_key = config
                .resolve_api_key()
                .ok_or_else(|| ApiError::not_configured(&config.secret_name))?;
            let value = state.inference.classify_text(&api_key, &request.text).await?;
            sentiment::classification_from_response(&value)
        }
    };

    Ok(Json(result))
}
