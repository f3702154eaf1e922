use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{error::ApiError, openapi, state::AppState, templates::render};

#[derive(Template)]
#[template(path = "swagger.html")]
struct SwaggerUiTemplate {
    title: String,
    spec: String,
}

/// `GET /api/docs`: Swagger UI with the OpenAPI document inlined, so the
/// page needs no separately served schema URL.
pub async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let spec = openapi::document(&state.config);

    render(&SwaggerUiTemplate {
        title: format!("{} - Swagger UI", state.config.app_name),
        spec: spec.to_string(),
    })
}
