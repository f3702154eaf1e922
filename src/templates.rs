use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub struct HtmlResponse(pub String);

impl IntoResponse for HtmlResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}

pub fn render<T: Template>(tmpl: &T) -> Result<HtmlResponse, ApiError> {
    let html = tmpl
        .render()
        .map_err(|e| ApiError::Internal(format!("template render error: {e}")))?;
    Ok(HtmlResponse(html))
}
