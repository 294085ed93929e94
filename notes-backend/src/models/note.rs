use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note. The ID and `created_at` are assigned by the store and
/// never change afterwards; `updated_at` stays absent until the first
/// successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of POST /api/v1/notes.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body of PATCH /api/v1/notes/{id} — each field independently optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Paginated response envelope for note listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub total_pages: usize,
}
