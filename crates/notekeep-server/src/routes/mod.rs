//! API routes.

pub mod health;
pub mod notes;
pub mod openapi;

pub use health::{HealthResponse, health_routes};
pub use notes::{
    JSON_CONTENT_TYPE, create_note_handler, delete_note_handler, export_notes_handler,
    get_note_handler, list_notes_handler, notes_routes, update_note_handler,
};
pub use openapi::ApiDoc;
