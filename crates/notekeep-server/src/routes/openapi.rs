//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use super::{health, notes};
use crate::note::Note;

/// OpenAPI documentation for the notekeep API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "notekeep API",
        description = "In-memory note store over HTTP",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Local server"),
    ),
    paths(
        health::health,
        notes::list_notes_handler,
        notes::create_note_handler,
        notes::export_notes_handler,
        notes::get_note_handler,
        notes::update_note_handler,
        notes::delete_note_handler,
    ),
    components(
        schemas(
            Note,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "notes", description = "Note storage"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Render the document as pretty-printed JSON.
    pub fn to_pretty_json() -> Result<String, serde_json::Error> {
        ApiDoc::openapi().to_pretty_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_note_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/notes"));
        assert!(paths.contains(&"/notes/{id}"));
        assert!(paths.contains(&"/notes/export"));
        assert!(paths.contains(&"/health"));
    }

    #[test]
    fn test_openapi_renders_json() {
        let json = ApiDoc::to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["components"]["schemas"]["Note"].is_object());
    }
}
