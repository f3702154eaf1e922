use std::env;

/// Service metadata surfaced in the OpenAPI document.
///
/// Read-only after initialization; shared through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Reads the configuration from the environment, falling back to
    /// built-in defaults.
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME")
                .unwrap_or_else(|_| "Greeting API on AWS Lambda".to_string()),
            version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("APP_DESCRIPTION")
                .unwrap_or_else(|_| "Greeting API running on AWS Lambda".to_string()),
        }
    }
}
