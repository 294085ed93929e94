//! Concurrent in-memory note repository.
//!
//! Owns the full set of notes and the ID counter behind a single
//! `parking_lot::RwLock`. Reads (`get`, `list`) take the shared lock;
//! mutations (`create`, `update`, `delete`) take the exclusive lock for
//! their whole critical section, including ID allocation and timestamp
//! assignment, so two concurrent creates can never receive the same ID.
//! Callers always get cloned `Note` values, never references into the map.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::models::{Note, UpdateNoteRequest};

struct Inner {
    notes: HashMap<i64, Note>,
    next_id: i64,
}

pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new note and return it. IDs start at 1, are strictly
    /// increasing across the store's lifetime, and are never reused even
    /// after a delete.
    pub fn create(&self, title: String, content: String) -> Note {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let note = Note {
            id,
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.notes.insert(id, note.clone());

        note
    }

    /// Look up a note by ID, returning a copy.
    pub fn get(&self, id: i64) -> Option<Note> {
        self.inner.read().notes.get(&id).cloned()
    }

    /// Filtered, paginated listing.
    ///
    /// A note matches when `query` is empty or its title contains `query`
    /// as a literal, case-sensitive substring. `total` counts every match
    /// before the page window `[(page-1)*limit, +limit)` is applied. The
    /// filtered set is ordered by ascending ID so pagination is stable
    /// across calls. Non-positive `page` or `limit`, or a window starting
    /// past the end, yields an empty page with the correct total.
    pub fn list(&self, page: i64, limit: i64, query: &str) -> (Vec<Note>, usize) {
        let inner = self.inner.read();

        let mut filtered: Vec<&Note> = inner
            .notes
            .values()
            .filter(|note| query.is_empty() || note.title.contains(query))
            .collect();
        filtered.sort_by_key(|note| note.id);

        let total = filtered.len();

        if page < 1 || limit < 1 {
            return (Vec::new(), total);
        }

        let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        if start >= total {
            return (Vec::new(), total);
        }

        let notes = filtered
            .into_iter()
            .skip(start)
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        (notes, total)
    }

    /// Apply the supplied fields to an existing note and refresh
    /// `updated_at`. The ID and `created_at` are left untouched. Returns
    /// the merged note, or `None` when the ID does not exist (in which
    /// case nothing changes).
    pub fn update(&self, id: i64, changes: UpdateNoteRequest) -> Option<Note> {
        let mut inner = self.inner.write();
        let note = inner.notes.get_mut(&id)?;

        if let Some(title) = changes.title {
            note.title = title;
        }
        if let Some(content) = changes.content {
            note.content = content;
        }
        note.updated_at = Some(Utc::now());

        Some(note.clone())
    }

    /// Remove a note permanently. Returns false when the ID does not
    /// exist. A deleted ID is never handed out by a future `create`.
    pub fn delete(&self, id: i64) -> bool {
        self.inner.write().notes.remove(&id).is_some()
    }

    /// Number of stored notes.
    pub fn count(&self) -> usize {
        self.inner.read().notes.len()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
