//! In-memory note store.
//!
//! `NoteStore` owns the ordered note list, the editing pointer and the draft
//! text of the input field. Every operation is total: empty input and unknown
//! ids are ignored rather than reported. Each mutation that changes the list
//! writes the post-mutation list through the injected [`NotePersistence`]
//! before returning.

use std::collections::HashSet;

use crate::models::{is_blank, Note, NoteId};
use crate::persistence::NotePersistence;
use crate::render::{render_or_fallback, MarkdownRenderer};
use crate::util::unix_timestamp_millis_now;

/// Which note, if any, the input field is currently revising
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing(NoteId),
}

impl EditState {
    /// Edit target, if any
    #[must_use]
    pub const fn target(self) -> Option<NoteId> {
        match self {
            Self::NotEditing => None,
            Self::Editing(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// What the submit button does in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update,
}

impl SubmitAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create Note",
            Self::Update => "Update",
        }
    }
}

/// Ordered list of notes mirrored to persistence after every change
pub struct NoteStore<P, R> {
    notes: Vec<Note>,
    editing: EditState,
    draft: String,
    persistence: P,
    renderer: R,
    clock: fn() -> i64,
    last_save_error: Option<String>,
}

impl<P: NotePersistence, R: MarkdownRenderer> NoteStore<P, R> {
    /// Load persisted notes and build a store around them.
    ///
    /// Repeated ids keep their first occurrence, and stored HTML that no longer
    /// matches the renderer output is regenerated.
    pub fn open(persistence: P, renderer: R) -> Self {
        let loaded = persistence.load();
        let total = loaded.len();

        let mut seen = HashSet::with_capacity(total);
        let mut notes = loaded
            .into_iter()
            .filter(|note| seen.insert(note.id))
            .collect::<Vec<_>>();
        if notes.len() != total {
            tracing::warn!(
                "Dropped {} persisted notes with duplicate ids",
                total - notes.len()
            );
        }

        let mut refreshed = 0usize;
        for note in &mut notes {
            let html = render_or_fallback(&renderer, &note.content);
            if html != note.rendered_content {
                note.rendered_content = html;
                refreshed += 1;
            }
        }
        if refreshed > 0 {
            tracing::debug!("Re-rendered {} stale notes on load", refreshed);
        }

        tracing::info!("Opened note store with {} notes", notes.len());

        Self {
            notes,
            editing: EditState::NotEditing,
            draft: String::new(),
            persistence,
            renderer,
            clock: unix_timestamp_millis_now,
            last_save_error: None,
        }
    }

    /// Replace the millisecond clock used for new ids
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub const fn editing(&self) -> EditState {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub const fn submit_action(&self) -> SubmitAction {
        if self.editing.is_editing() {
            SubmitAction::Update
        } else {
            SubmitAction::Create
        }
    }

    /// Message from the most recent failed write, cleared by the next success
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Append a new note. Blank content is ignored.
    pub fn create(&mut self, content: &str) -> Option<NoteId> {
        if is_blank(content) {
            return None;
        }

        let rendered = render_or_fallback(&self.renderer, content);
        let taken = self.notes.iter().map(|note| note.id).collect::<Vec<_>>();
        let id = NoteId::fresh((self.clock)(), &taken);

        self.notes.push(Note::new(id, content, rendered));
        self.draft.clear();
        tracing::debug!("Created note {}", id);

        self.persist();
        Some(id)
    }

    /// Replace a note's content in place. Always ends any edit in progress.
    pub fn update(&mut self, id: NoteId, content: &str) -> bool {
        self.editing = EditState::NotEditing;

        if is_blank(content) {
            return false;
        }

        let rendered = render_or_fallback(&self.renderer, content);
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.content = content.to_string();
        note.rendered_content = rendered;
        tracing::debug!("Updated note {}", id);

        self.persist();
        true
    }

    /// Remove a note if present. Always ends any edit in progress.
    pub fn delete(&mut self, id: NoteId) -> bool {
        self.editing = EditState::NotEditing;

        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }
        tracing::debug!("Deleted note {}", id);

        self.persist();
        true
    }

    /// Load a note's raw content into the draft and target it for update.
    pub fn begin_edit(&mut self, id: NoteId) -> Option<&str> {
        let content = self.get(id)?.content.clone();
        self.draft = content;
        self.editing = EditState::Editing(id);
        Some(&self.draft)
    }

    /// Abandon an edit and clear the draft without touching any note.
    pub fn cancel_edit(&mut self) {
        self.editing = EditState::NotEditing;
        self.draft.clear();
    }

    /// Submit the draft: update the edit target, or create a new note.
    pub fn submit(&mut self) -> Option<NoteId> {
        let content = self.draft.clone();
        match self.editing {
            EditState::Editing(id) => {
                if self.update(id, &content) {
                    self.draft.clear();
                    Some(id)
                } else {
                    None
                }
            }
            EditState::NotEditing => self.create(&content),
        }
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.notes) {
            Ok(()) => self.last_save_error = None,
            Err(error) => {
                tracing::error!("Failed to persist notes: {}", error);
                self.last_save_error = Some(error.to_string());
            }
        }
    }
}
