use axum::{extract::rejection::JsonRejection, Json};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::ApiError;

use super::Greeting;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HelloUserPayload {
    pub name: String,
}

/// `POST /api/helloUser` greeting for an explicitly named user.
///
/// Body deserialization failures (missing or mistyped `name`) surface as a
/// 422 validation error instead of axum's default plain-text rejection.
pub async fn handler(
    payload: Result<Json<HelloUserPayload>, JsonRejection>,
) -> Result<Json<Greeting>, ApiError> {
    let Json(payload) = payload?;

    Ok(Json(Greeting {
        message: format!("Hello, {}!", payload.name),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use lambda_http::tower::ServiceExt;

    use crate::{config::Config, routes, state::AppState};

    fn test_router() -> axum::Router {
        routes::router(AppState::new(Config::from_env()))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/helloUser")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_hello_user() {
        let app = test_router();

        let response = app.oneshot(post_json(r#"{"name":"Bob"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"Hello, Bob!"}"#);
    }

    #[tokio::test]
    async fn test_hello_user_missing_name() {
        let app = test_router();

        let response = app.oneshot(post_json("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
        assert!(json["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_hello_user_wrong_type() {
        let app = test_router();

        let response = app.oneshot(post_json(r#"{"name":42}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
