//! Notes endpoints.
//!
//! Thin adapters between HTTP and the [`NoteStore`](crate::store::NoteStore).
//! Bodies are decoded by hand rather than through `Json` so that every
//! malformed body maps to 400, whatever the request `Content-Type`.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ServerError;
use crate::note::Note;
use crate::state::AppState;

/// Content type for every response that carries a body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Path segment reserved for the export stub.
const EXPORT_SEGMENT: &str = "export";

/// Create the notes routes.
pub fn notes_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes_handler).post(create_note_handler))
        // Only GET is the stub; PUT/DELETE still address a note with id "export".
        .route(
            "/notes/export",
            get(export_notes_handler)
                .put(update_export_note_handler)
                .delete(delete_export_note_handler),
        )
        .route(
            "/notes/{id}",
            get(get_note_handler)
                .put(update_note_handler)
                .delete(delete_note_handler),
        )
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ServerError> {
    let body = serde_json::to_vec(value)?;
    Ok((status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

fn parse_note(body: &[u8]) -> Result<Note, ServerError> {
    serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid note body: {}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /notes - List all notes.
#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes, in no particular order", body = Vec<Note>),
    ),
    tag = "notes"
)]
pub async fn list_notes_handler(State(state): State<AppState>) -> Result<Response, ServerError> {
    let notes = state.store.list();
    json_response(StatusCode::OK, &notes)
}

/// GET /notes/{id} - Get a single note.
#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID"),
    ),
    responses(
        (status = 200, description = "Note found", body = Note),
        (status = 404, description = "Note not found"),
    ),
    tag = "notes"
)]
pub async fn get_note_handler(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Response, ServerError> {
    // Percent-encoded forms of "export" reach this route after decoding.
    if note_id == EXPORT_SEGMENT {
        return Err(export_notes_handler().await);
    }
    let note = state.store.get(&note_id)?;
    json_response(StatusCode::OK, &note)
}

/// POST /notes - Create a note, replacing any note with the same ID.
#[utoipa::path(
    post,
    path = "/notes",
    request_body = Note,
    responses(
        (status = 201, description = "Note stored", body = Note),
        (status = 400, description = "Body is not a note or the id is empty"),
    ),
    tag = "notes"
)]
pub async fn create_note_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ServerError> {
    let note = state.store.create(parse_note(&body)?)?;
    debug!(note_id = %note.id, "Note stored");
    json_response(StatusCode::CREATED, &note)
}

/// PUT /notes/{id} - Replace a note. The path ID wins over any ID in the body.
#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID"),
    ),
    request_body = Note,
    responses(
        (status = 204, description = "Note replaced"),
        (status = 400, description = "Body is not a note"),
        (status = 404, description = "Note not found"),
    ),
    tag = "notes"
)]
pub async fn update_note_handler(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ServerError> {
    update_note(&state, &note_id, &body)
}

/// DELETE /notes/{id} - Delete a note.
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID"),
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found"),
    ),
    tag = "notes"
)]
pub async fn delete_note_handler(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, ServerError> {
    delete_note(&state, &note_id)
}

/// GET /notes/export - Not implemented; always 404.
#[utoipa::path(
    get,
    path = "/notes/export",
    responses(
        (status = 404, description = "Export is not implemented"),
    ),
    tag = "notes"
)]
pub async fn export_notes_handler() -> ServerError {
    ServerError::NotFound("note export is not implemented".to_string())
}

async fn update_export_note_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ServerError> {
    update_note(&state, EXPORT_SEGMENT, &body)
}

async fn delete_export_note_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, ServerError> {
    delete_note(&state, EXPORT_SEGMENT)
}

fn update_note(state: &AppState, note_id: &str, body: &[u8]) -> Result<StatusCode, ServerError> {
    let note = match parse_note(body) {
        Ok(note) => note,
        // An unknown id is reported ahead of a malformed body.
        Err(e) if state.store.contains(note_id) => return Err(e),
        Err(_) => return Err(ServerError::NotFound(format!("Note {} not found", note_id))),
    };

    state.store.update(note_id, note)?;
    debug!(note_id = %note_id, "Note replaced");
    Ok(StatusCode::NO_CONTENT)
}

fn delete_note(state: &AppState, note_id: &str) -> Result<StatusCode, ServerError> {
    state.store.delete(note_id)?;
    debug!(note_id = %note_id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
