mod docs;
pub(crate) mod hello_user;
mod omy;

use axum::{
    routing::{get, post},
    Router,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

/// Response body shared by both greeting endpoints.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Greeting {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/omy", get(omy::handler))
        .route("/api/helloUser", post(hello_user::handler))
        .route("/api/docs", get(docs::handler))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no route matched the request path".to_string())
}
