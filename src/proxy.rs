use axum::Router;
use lambda_http::{tower::ServiceExt, Body, Error, Request, Response};

/// Forwards an inbound gateway request into the embedded router and relays
/// the response back to the gateway unchanged.
///
/// Emits one log line per call with the method, URI, and resulting status.
pub async fn handle(app: Router, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let uri = event.uri().clone();

    let response = app
        .oneshot(event.map(|body| axum::body::Body::from(body.to_vec())))
        .await?;

    let status = response.status();
    tracing::info!("{method} {uri} -> {}", status.as_u16());

    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await?;

    let body = if bytes.is_empty() {
        Body::Empty
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Body::Text(text),
            Err(e) => Body::Binary(e.into_bytes()),
        }
    };

    Ok(Response::from_parts(parts, body))
}
