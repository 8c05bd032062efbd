use std::sync::Arc;

use axum::{Router, routing::get};
use state::State;

pub mod error;
pub mod openapi;
mod routes;
pub mod state;

pub use axum;

pub fn construct_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .nest("/health", routes::health::routes())
        .nest("/sentiment", routes::sentiment::routes())
        .nest("/classify", routes::classify::routes())
        .nest("/quiz", routes::quiz::routes())
        .nest("/samples", routes::samples::routes())
        .route("/openapi.json", get(openapi::openapi_json))
        .with_state(state);

    Router::new().nest("/api/v1", router)
}
