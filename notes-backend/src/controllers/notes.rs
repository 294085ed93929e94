//! Notes REST API — CRUD endpoints backed by the in-memory store.
//!
//! The transport layer owns all parsing, validation and status mapping;
//! the store only ever sees validated plain values.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::config::defaults;
use crate::models::{CreateNoteRequest, ListNotesResponse, UpdateNoteRequest};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ListNotesQuery {
    page: Option<i64>,
    limit: Option<i64>,
    q: Option<String>,
}

/// Resolve page/limit query values to the bounds the store expects:
/// page floored to 1, limit clamped to [1, MAX_PAGE_LIMIT].
fn page_params(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit
        .unwrap_or(defaults::PAGE_LIMIT)
        .clamp(1, defaults::MAX_PAGE_LIMIT);
    (page, limit)
}

/// Parse the `{id}` path segment, or build the 400 response
fn parse_note_id(path: web::Path<String>) -> Result<i64, HttpResponse> {
    path.into_inner().parse::<i64>().map_err(|_| {
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid ID"
        }))
    })
}

/// List notes with pagination and a title substring filter
async fn list_notes(
    data: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> impl Responder {
    let (page, limit) = page_params(query.page, query.limit);
    let q = query.q.as_deref().map(str::trim).unwrap_or("");

    let (notes, total) = data.store.list(page, limit, q);
    let total_pages = total.div_ceil(limit as usize);

    HttpResponse::Ok()
        .insert_header(("X-Total-Count", total.to_string()))
        .json(ListNotesResponse {
            notes,
            total,
            page,
            limit,
            total_pages,
        })
}

/// Create a note from a JSON body; title must be non-empty
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if request.title.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Title is required"
        }));
    }

    let note = data.store.create(request.title, request.content);
    log::info!("Created note {}", note.id);

    HttpResponse::Created().json(note)
}

/// Fetch a single note by ID
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_note_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.store.get(id) {
        Some(note) => HttpResponse::Ok().json(note),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Note not found"
        })),
    }
}

/// Partially update a note; only supplied fields are applied
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = match parse_note_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.store.update(id, body.into_inner()) {
        Some(note) => HttpResponse::Ok().json(note),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Note not found"
        })),
    }
}

/// Delete a note permanently
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_note_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if data.store.delete(id) {
        log::info!("Deleted note {}", id);
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(serde_json::json!({
            "error": "Note not found"
        }))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::patch().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_fall_back_to_defaults() {
        assert_eq!(page_params(None, None), (1, defaults::PAGE_LIMIT));
    }

    #[test]
    fn page_params_floor_page_to_one() {
        assert_eq!(page_params(Some(0), Some(20)), (1, 20));
        assert_eq!(page_params(Some(-3), Some(20)), (1, 20));
    }

    #[test]
    fn page_params_clamp_limit_to_bounds() {
        assert_eq!(page_params(Some(2), Some(0)), (2, 1));
        assert_eq!(page_params(Some(2), Some(1000)), (2, defaults::MAX_PAGE_LIMIT));
    }
}
