use schemars::schema_for;
use serde_json::{json, Value};

use crate::config::Config;
use crate::routes::{hello_user::HelloUserPayload, Greeting};

/// Builds the OpenAPI 3.1 document describing the greeting endpoints.
///
/// The docs page itself is intentionally absent from `paths`.
pub fn document(config: &Config) -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": config.app_name,
            "version": config.version,
            "description": config.description
        },
        "paths": {
            "/api/omy": {
                "get": {
                    "summary": "O my greeting",
                    "operationId": "omy",
                    "parameters": [
                        {
                            "name": "name",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string", "default": "World" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Greeting message",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Greeting" }
                                }
                            }
                        }
                    }
                }
            },
            "/api/helloUser": {
                "post": {
                    "summary": "Hello user greeting",
                    "operationId": "helloUser",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/HelloUserPayload" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Greeting message",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Greeting" }
                                }
                            }
                        },
                        "422": {
                            "description": "Validation error"
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Greeting": schema_for!(Greeting),
                "HelloUserPayload": schema_for!(HelloUserPayload)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::document;
    use crate::config::Config;

    #[test]
    fn test_document_lists_greeting_paths_only() {
        let config = Config::from_env();
        let doc = document(&config);

        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains_key("/api/omy"));
        assert!(paths.contains_key("/api/helloUser"));

        assert_eq!(doc["info"]["title"], config.app_name);
        assert_eq!(doc["info"]["version"], config.version);
    }

    #[test]
    fn test_payload_schema_requires_name() {
        let doc = document(&Config::from_env());

        let payload = &doc["components"]["schemas"]["HelloUserPayload"];
        assert_eq!(payload["properties"]["name"]["type"], "string");
        assert!(payload["required"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "name"));
    }
}
