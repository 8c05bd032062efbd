use crate::{error::ApiError, state::AppState};
use axum::{Json, Router, extract::State, routing::get};
use mood_notebook::samples::Scene;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_scenes))
}

#[utoipa::path(
    get,
    path = "/samples",
    tag = "samples",
    responses(
        (status = 200, description = "Sample scenes to try against the classifier", body = Vec<Scene>)
    )
)]
#[tracing::instrument(name = "GET /samples", skip(state))]
pub async fn get_scenes(State(state): State<AppState>) -> Result<Json<Vec<Scene>>, ApiError> {
    Ok(Json(state.scenes.clone()))
}
