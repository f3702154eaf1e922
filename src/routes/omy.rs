use axum::{extract::Query, Json};
use serde::Deserialize;

use super::Greeting;

#[derive(Deserialize)]
pub struct OmyQuery {
    name: Option<String>,
}

/// `GET /api/omy` greeting, defaulting the name to "World".
pub async fn handler(Query(query): Query<OmyQuery>) -> Json<Greeting> {
    let name = query.name.unwrap_or_else(|| "World".to_string());

    Json(Greeting {
        message: format!("O my, hello, {name}!"),
    })
}
