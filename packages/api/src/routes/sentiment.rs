use crate::{error::ApiError, state::AppState};
use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use mood_notebook_types::Value;

pub fn routes() -> Router<AppState> {
    // The contract promises a JSON body on wrong-verb requests too, so the
    // bare axum 405 is replaced with an explicit fallback.
    Router::new().route("/", post(proxy_sentiment).fallback(method_not_allowed))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Lenient body handling: anything that is not a JSON object with a
/// non-empty string `text` counts as "no text provided". Whitespace-only
/// text is still text and gets forwarded.
fn extract_text(body: &Bytes) -> Result<String, ApiError> {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    payload
        .get("text")
        .and_then(|text| text.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::bad_request("No text provided"))
}

#[utoipa::path(
    post,
    path = "/sentiment",
    tag = "sentiment",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream inference response, relayed verbatim"),
        (status = 400, description = "No text provided"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Credential not configured, or the upstream call failed")
    )
)]
#[tracing::instrument(name = "POST /sentiment", skip(state, body))]
pub async fn proxy_sentiment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let text = extract_text(&body)?;

    let config = state.inference.config();
    let api_key = config
        .resolve_api_key()
        .ok_or_else(|| ApiError::not_configured(&config.secret_name))?;

    let value = state.inference.classify_text(&api_key, &text).await?;
    Ok(Json(value))
}
